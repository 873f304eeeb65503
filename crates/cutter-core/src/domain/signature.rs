//! Extracted method signatures and the index keyed by method name.

use std::collections::HashMap;

use serde::Serialize;

/// A function definition lifted out of the template text.
///
/// `raw_parameters` is the unparsed text between the definition's
/// parentheses, split only on commas. Nested parentheses, default values
/// containing commas, and type annotations are *not* understood — the items
/// are whatever raw text sat between the commas. This is a documented
/// limitation of the line-oriented scanner, not a bug to fix silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    name: String,
    raw_parameters: Vec<String>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, raw_parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            raw_parameters,
        }
    }

    /// The method name as it appears in the definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw comma-split parameter text, in declaration order.
    pub fn raw_parameters(&self) -> &[String] {
        &self.raw_parameters
    }
}

/// Mapping from method name to its extracted signature.
///
/// Keys are unique; when a name is defined more than once in the source the
/// last occurrence wins (plain key overwrite during construction). Order is
/// irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefinitionIndex {
    methods: HashMap<String, MethodSignature>,
}

impl DefinitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a signature, overwriting any earlier definition of the same name.
    pub fn insert(&mut self, signature: MethodSignature) {
        self.methods.insert(signature.name().to_owned(), signature);
    }

    /// `true` if a definition with exactly this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.get(name)
    }

    /// Iterate over the defined method names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_same_name() {
        let mut index = DefinitionIndex::new();
        index.insert(MethodSignature::new("run", vec!["a".into()]));
        index.insert(MethodSignature::new("run", vec!["b".into()]));

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get("run").map(MethodSignature::raw_parameters),
            Some(["b".to_string()].as_slice())
        );
    }

    #[test]
    fn contains_is_exact() {
        let mut index = DefinitionIndex::new();
        index.insert(MethodSignature::new("deploy", vec![]));

        assert!(index.contains("deploy"));
        assert!(!index.contains("_deploy"));
        assert!(!index.contains("Deploy"));
    }

    #[test]
    fn empty_index_reports_empty() {
        let index = DefinitionIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.names().count(), 0);
    }
}
