use crate::error::{DescriptorError, DescriptorResult};
use std::collections::HashMap;
use tracing::debug;

/// An entity whose identity is its name.
pub trait Named {
    /// Entity kind used in diagnostics, e.g. `"command"`.
    const KIND: &'static str;

    fn with_name(name: String) -> Self;
    fn name(&self) -> &str;
}

/// Insertion-ordered collection of uniquely named entities.
///
/// Lookups by an existing name hand back the stored entity, so repeated
/// configuration of one name accumulates onto a single instance.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedContainer<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for NamedContainer<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

pub(crate) fn validate_name<'a>(kind: &'static str, name: &'a str) -> DescriptorResult<&'a str> {
    if name.trim().is_empty() {
        return Err(DescriptorError::InvalidName { kind });
    }
    Ok(name)
}

impl<T: Named> NamedContainer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, name: &str) -> DescriptorResult<&mut T> {
        let name = validate_name(T::KIND, name)?;
        if let Some(&idx) = self.index.get(name) {
            return self
                .items
                .get_mut(idx)
                .ok_or_else(|| DescriptorError::DuplicateState {
                    kind: T::KIND,
                    name: name.to_string(),
                });
        }

        let idx = self.items.len();
        self.items.push(T::with_name(name.to_string()));
        self.index.insert(name.to_string(), idx);
        debug!(kind = T::KIND, name, "created");
        Ok(&mut self.items[idx])
    }

    pub fn configure<F>(&mut self, name: &str, f: F) -> DescriptorResult<()>
    where
        F: FnOnce(&mut T),
    {
        f(self.get_or_create(name)?);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).and_then(|&idx| self.items.get(idx))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        match self.index.get(name) {
            Some(&idx) => self.items.get_mut(idx),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name())
    }
}

impl<T> NamedContainer<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a NamedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        name: String,
        hits: u32,
    }

    impl Named for Node {
        const KIND: &'static str = "node";

        fn with_name(name: String) -> Self {
            Self { name, hits: 0 }
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn same_name_resolves_to_same_entity() {
        let mut nodes = NamedContainer::<Node>::new();
        nodes.get_or_create("a").unwrap().hits += 1;
        nodes.get_or_create("a").unwrap().hits += 1;

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes.get("a").unwrap().hits, 2);
    }

    #[test]
    fn keeps_first_request_order() {
        let mut nodes = NamedContainer::<Node>::new();
        for name in ["zeta", "alpha", "mid", "alpha"] {
            nodes.get_or_create(name).unwrap();
        }
        nodes.get_mut("zeta").unwrap().hits = 9;

        let names: Vec<_> = nodes.names().collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn blank_names_rejected() {
        let mut nodes = NamedContainer::<Node>::new();
        for name in ["", "   "] {
            let err = nodes.get_or_create(name).unwrap_err();
            assert!(matches!(err, DescriptorError::InvalidName { kind: "node" }));
        }
        assert!(nodes.is_empty());
    }

    #[test]
    fn configure_applies_to_resolved_entity() {
        let mut nodes = NamedContainer::<Node>::new();
        nodes.configure("a", |n| n.hits = 3).unwrap();
        nodes.configure("a", |n| n.hits += 1).unwrap();
        assert_eq!(nodes.get("a").map(|n| n.hits), Some(4));
        assert!(nodes.contains("a"));
        assert!(nodes.get("b").is_none());
    }
}
