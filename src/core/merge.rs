use serde_yaml::mapping::Entry;
use serde_yaml::{Mapping, Value};

/// Deep-merge `source` into `target` in place.
///
/// Keys absent from `target` are inserted with their whole subtree. When both
/// sides hold mappings the merge recurses; any other pairing replaces the
/// existing value wholesale (sequences are never merged element-wise).
/// Merging the same `source` twice leaves `target` unchanged after the first
/// application.
pub fn merge_mapping(target: &mut Mapping, source: &Mapping) {
    for (key, incoming) in source {
        match target.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(incoming.clone());
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                (Value::Mapping(existing), Value::Mapping(incoming)) => {
                    merge_mapping(existing, incoming);
                }
                (existing, incoming) => {
                    *existing = incoming.clone();
                }
            },
        }
    }
}
