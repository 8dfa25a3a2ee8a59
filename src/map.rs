use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// The capability set a container needs for key-based extraction.
pub trait SequentialMap<K, V> {
    /// Lookup (key, value) from the map with the key.
    ///
    /// If success, return the reference of the value.
    /// If fail, return None.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Remove (key, value) from the map with the key.
    ///
    /// If success, return Ok(value) which is inserted before.
    /// If fail, return Err(()).
    fn remove(&mut self, key: &K) -> Result<V, ()>;

    /// Whether the map has an entry for the key.
    fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K: Ord, V> SequentialMap<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, ()> {
        BTreeMap::remove(self, key).ok_or(())
    }
}

impl<K, V, S> SequentialMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, ()> {
        HashMap::remove(self, key).ok_or(())
    }
}
