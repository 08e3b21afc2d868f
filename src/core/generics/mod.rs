use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use serde::{Serialize, Deserialize};

/// Flatten a map into key/value pairs, in the map's iteration order
pub fn pairs<K, V>(map: HashMap<K, V>) -> Vec<(K, V)>
where
    K: Eq + Hash,
{
    map.into_iter().collect()
}

/// Lower median: the item at `(n - 1) / 2` once sorted. `None` for an empty slice.
pub fn mid<T: Ord + Clone>(items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let mut sorted = items.to_vec();
    sorted.sort();
    Some(sorted.swap_remove((sorted.len() - 1) / 2))
}

/// Reward carrying an optional treasure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Reward<T> {
    TreasureChest(T),
    Medal,
}

impl<T: Display> Reward<T> {
    pub fn message(&self) -> String {
        match self {
            Reward::TreasureChest(treasure) => format!("You got a chest filled with {}.", treasure),
            Reward::Medal => "Stand proud, you earned a medal!".to_string(),
        }
    }
}
