use std::collections::HashMap;
use std::hash::Hash;

/// A map that remembers the order in which keys were first inserted.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    map: HashMap<K, V>,
    keys: Vec<K>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Copy + Eq + Hash,
{
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.keys.iter().filter_map(|&key| {
            self.map.get(&key).map(|value| (key, value))
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Inserting an existing key replaces its value but keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if !self.map.contains_key(&key) {
            self.keys.push(key);
        }
        self.map.insert(key, value)
    }

    pub fn remove(&mut self, key: K) -> Option<V> {
        let value = self.map.remove(&key)?;
        self.keys.retain(|&existing| existing != key);
        Some(value)
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn iterates_in_insertion_order() {
        let mut map = OrderedMap::default();
        map.insert(7, "seven");
        map.insert(2, "two");
        map.insert(5, "five");

        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(7, &"seven"), (2, &"two"), (5, &"five")]);
    }

    #[test]
    fn reinserting_keeps_position() {
        let mut map = OrderedMap::default();
        map.insert(1, 'a');
        map.insert(2, 'b');

        assert_eq!(map.insert(1, 'z'), Some('a'));
        assert_eq!(map.values().copied().collect::<String>(), "zb");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn removal_drops_key_from_order() {
        let mut map = OrderedMap::default();
        map.insert(1, 'a');
        map.insert(2, 'b');
        map.insert(3, 'c');

        assert_eq!(map.remove(2), Some('b'));
        assert_eq!(map.remove(2), None);
        assert_eq!(map.values().copied().collect::<String>(), "ac");
    }

    #[test]
    fn clear_empties_map() {
        let mut map = OrderedMap::default();
        map.insert(1, ());
        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }
}
