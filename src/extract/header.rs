//! Header-name assignment for extracted tables.

use std::collections::{HashMap, HashSet};

/// Name given to columns whose header cell is blank.
const PLACEHOLDER: &str = "_1";

/// Assigns unique, order-preserving column names from raw header text.
///
/// Collisions take a numbered suffix driven by an occurrence counter per base
/// name, so repeated duplicates stay unique (`A`, `A_1`, `A_2`, ...) and a
/// candidate that is already taken as a literal header is skipped over.
#[derive(Debug, Default)]
pub(crate) struct HeaderNamer {
    /// Names already handed out
    taken: HashSet<String>,
    /// Collision count per base name
    collisions: HashMap<String, usize>,
}

impl HeaderNamer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns a unique column name for the given raw header text.
    pub(crate) fn assign(&mut self, raw: &str) -> String {
        let trimmed = raw.trim();
        let base = if trimmed.is_empty() { PLACEHOLDER } else { trimmed };
        if self.taken.insert(base.to_owned()) {
            return base.to_owned();
        }
        let counter = self.collisions.entry(base.to_owned()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}_{}", base, counter);
            if self.taken.insert(candidate.to_owned()) {
                return candidate;
            }
        }
    }
}
