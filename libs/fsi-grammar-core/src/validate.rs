//! Key uniqueness checks run before any join.

use crate::error::{DuplicateKey, ValidationError};
use crate::types::{Table, Tables};
use std::collections::HashMap;
use std::hash::Hash;

/// Check that the model key, prefix `R1` and note `Id` are each unique.
///
/// Every duplicate in every table is collected before failing.
pub fn check_unique_keys(tables: &Tables) -> Result<(), ValidationError> {
    let mut duplicates = Vec::new();

    duplicates.extend(find_duplicates(
        Table::Model,
        tables.models.iter().map(|m| (m.key(), m.line)),
    ));
    duplicates.extend(find_duplicates(
        Table::Prefixes,
        tables.prefixes.iter().map(|p| (p.r1.as_str(), p.line)),
    ));
    duplicates.extend(find_duplicates(
        Table::Notes,
        tables.notes.iter().map(|n| (n.id, n.line)),
    ));

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { duplicates })
    }
}

fn find_duplicates<K, I>(table: Table, keys: I) -> Vec<DuplicateKey>
where
    K: Hash + Eq + ToString,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut seen: HashMap<K, Vec<u64>> = HashMap::new();
    for (key, line) in keys {
        seen.entry(key).or_default().push(line);
    }

    let mut duplicates: Vec<DuplicateKey> = seen
        .into_iter()
        .filter(|(_, lines)| lines.len() > 1)
        .map(|(key, lines)| DuplicateKey {
            table,
            key: key.to_string(),
            lines,
        })
        .collect();
    duplicates.sort_by_key(|d| d.lines[0]);
    duplicates
}
