use crate::container::{Named, NamedContainer};
use crate::error::{DescriptorError, DescriptorResult};
use crate::keys::{self, PERMISSION_DEFAULT_ALIASES, PERMISSION_DEFAULT_LITERALS};
use std::fmt;
use std::str::FromStr;

/// Who holds a permission when nothing grants or revokes it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionDefault {
    True,
    False,
    Op,
    NotOp,
}

impl PermissionDefault {
    pub fn literal(self) -> &'static str {
        keys::literal_of(&PERMISSION_DEFAULT_LITERALS, self)
    }
}

impl fmt::Display for PermissionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl FromStr for PermissionDefault {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        keys::variant_of(&PERMISSION_DEFAULT_LITERALS, literal)
            .or_else(|| keys::variant_of(&PERMISSION_DEFAULT_ALIASES, literal))
            .ok_or_else(|| DescriptorError::InvalidValue {
                field: "default".to_string(),
                value: s.to_string(),
            })
    }
}

/// A permission node. Children form a tree below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    name: String,
    pub description: Option<String>,
    pub default: Option<PermissionDefault>,
    children: NamedContainer<Permission>,
}

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            default: None,
            children: NamedContainer::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &NamedContainer<Permission> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Permission> {
        self.children.get(name)
    }

    pub fn get_or_create_child(&mut self, name: &str) -> DescriptorResult<&mut Permission> {
        self.children.get_or_create(name)
    }

    pub fn configure_child<F>(&mut self, name: &str, f: F) -> DescriptorResult<()>
    where
        F: FnOnce(&mut Permission),
    {
        self.children.configure(name, f)
    }

    /// Number of nested `children` levels below this node.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Named for Permission {
    const KIND: &'static str = "permission";

    fn with_name(name: String) -> Self {
        Permission::new(name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
