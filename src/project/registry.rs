use std::collections::HashMap;

/// Insertion-ordered collection keyed by canonical name
///
/// Re-inserting a name replaces the stored value in place: the last writer
/// wins, the first writer's position is kept.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `name`; returns true when an earlier value was replaced
    pub fn insert(&mut self, name: String, value: T) -> bool {
        match self.index.get(&name) {
            Some(&slot) => {
                self.items[slot] = value;
                true
            }
            None => {
                self.index.insert(name, self.items.len());
                self.items.push(value);
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&slot| &self.items[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.index.get(name).map(|&slot| &mut self.items[slot])
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_writer_wins_in_first_position() {
        let mut registry = Registry::new();
        assert!(!registry.insert("a".to_string(), 1));
        assert!(!registry.insert("b".to_string(), 2));
        assert!(registry.insert("a".to_string(), 3));

        assert_eq!(registry.get("a"), Some(&3));
        assert_eq!(registry.into_vec(), vec![3, 2]);
    }
}
