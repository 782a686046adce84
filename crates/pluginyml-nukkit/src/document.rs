use crate::error::DescriptorResult;
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// The projected manifest: an insertion-ordered mapping ready to be encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestDocument {
    root: Mapping,
}

impl ManifestDocument {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().filter_map(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    pub fn to_yaml_string(&self) -> DescriptorResult<String> {
        Ok(pluginyml_core::render_yaml(&self.root)?)
    }
}

impl Serialize for ManifestDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl From<ManifestDocument> for Value {
    fn from(document: ManifestDocument) -> Self {
        Value::Mapping(document.root)
    }
}
