//! map.rs
//! Grouping and transforming keyed collections.

use std::collections::HashMap;
use std::hash::Hash;

/// Groups values by a key. Within each group, values keep their input order.
pub fn group_by<K, V, I, F>(values: I, mut key: F) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> K,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for value in values {
        groups.entry(key(&value)).or_default().push(value);
    }
    groups
}

/// Transforms every value of a map, keeping its key.
pub fn map_values<K, V1, V2, F>(map: HashMap<K, V1>, mut f: F) -> HashMap<K, V2>
where
    K: Eq + Hash,
    F: FnMut(&K, V1) -> V2,
{
    map.into_iter()
        .map(|(k, v)| {
            let v = f(&k, v);
            (k, v)
        })
        .collect()
}
