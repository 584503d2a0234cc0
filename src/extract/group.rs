//! Grouping of tagged lines by owning path.

use std::collections::HashMap;

/// Insertion-ordered map from rendered path to the lines it owns.
///
/// A path may be revisited after other sections were open, so groups are
/// not contiguous runs: every line tagged with a key is appended to that
/// key's group, whenever it occurs. Lines tagged with the empty path are
/// outside any object and dropped on insertion.
#[derive(Debug, Default)]
pub struct ObjectGroups {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<String>)>,
}

impl ObjectGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` to the group for `key`, creating the group on first use.
    pub fn push(&mut self, key: &str, line: String) {
        if key.is_empty() {
            return;
        }
        match self.index.get(key) {
            Some(&slot) => self.groups[slot].1.push(line),
            None => {
                self.index.insert(key.to_string(), self.groups.len());
                self.groups.push((key.to_string(), vec![line]));
            }
        }
    }

    /// Lines owned by `key`, in encounter order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group keys in order of first occurrence.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }
}

impl FromIterator<(String, String)> for ObjectGroups {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut groups = ObjectGroups::new();
        for (key, line) in iter {
            groups.push(&key, line);
        }
        groups
    }
}

impl IntoIterator for ObjectGroups {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
