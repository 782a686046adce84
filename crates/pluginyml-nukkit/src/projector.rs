//! Projects a [`PluginDescriptor`] into the ordered `plugin.yml` mapping.

use crate::command::Command;
use crate::container::{Named, NamedContainer};
use crate::descriptor::PluginDescriptor;
use crate::document::ManifestDocument;
use crate::error::{DescriptorError, DescriptorResult};
use crate::keys::{CommandField, DescriptorField, PermissionField};
use crate::permissions::Permission;
use serde_yaml::{Mapping, Value};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectorOptions {
    /// Reject descriptors without `name`, `main` or `version`.
    pub require_fields: bool,
}

impl ProjectorOptions {
    pub fn strict() -> Self {
        Self {
            require_fields: true,
        }
    }
}

pub fn project(
    descriptor: &PluginDescriptor,
    options: ProjectorOptions,
) -> DescriptorResult<ManifestDocument> {
    if options.require_fields {
        check_required(descriptor)?;
    }

    let mut root = Mapping::new();
    for field in DescriptorField::ALL {
        if let Some(value) = descriptor_value(descriptor, field) {
            root.insert(key(field.key()), value);
        }
    }
    debug!(
        keys = root.len(),
        commands = descriptor.commands().len(),
        permissions = descriptor.permissions().len(),
        permission_depth = permission_depth(descriptor),
        "descriptor projected"
    );
    Ok(ManifestDocument::new(root))
}

impl PluginDescriptor {
    pub fn to_document(&self, options: ProjectorOptions) -> DescriptorResult<ManifestDocument> {
        project(self, options)
    }
}

/// Levels of permissions, counting the top level; 0 when there are none.
fn permission_depth(descriptor: &PluginDescriptor) -> usize {
    descriptor
        .permissions()
        .iter()
        .map(|permission| permission.depth() + 1)
        .max()
        .unwrap_or(0)
}

fn check_required(descriptor: &PluginDescriptor) -> DescriptorResult<()> {
    for field in DescriptorField::REQUIRED {
        let slot = match field {
            DescriptorField::Name => &descriptor.name,
            DescriptorField::Main => &descriptor.main,
            _ => &descriptor.version,
        };
        if slot.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(DescriptorError::MissingRequiredField(field.key()));
        }
    }
    Ok(())
}

fn descriptor_value(descriptor: &PluginDescriptor, field: DescriptorField) -> Option<Value> {
    match field {
        DescriptorField::Name => string(&descriptor.name),
        DescriptorField::Main => string(&descriptor.main),
        DescriptorField::Version => string(&descriptor.version),
        DescriptorField::Api => list(&descriptor.api),
        DescriptorField::Description => string(&descriptor.description),
        DescriptorField::Load => descriptor.load.map(|load| key(load.literal())),
        DescriptorField::Author => string(&descriptor.author),
        DescriptorField::Authors => list(&descriptor.authors),
        DescriptorField::Website => string(&descriptor.website),
        DescriptorField::Depend => list(&descriptor.depend),
        DescriptorField::SoftDepend => list(&descriptor.soft_depend),
        DescriptorField::LoadBefore => list(&descriptor.load_before),
        DescriptorField::Prefix => string(&descriptor.prefix),
        DescriptorField::DefaultPermission => descriptor
            .default_permission
            .map(|default| key(default.literal())),
        DescriptorField::Commands => non_empty(descriptor.commands(), command_value),
        DescriptorField::Permissions => non_empty(descriptor.permissions(), permission_value),
    }
}

fn command_value(command: &Command) -> Value {
    let mut body = Mapping::new();
    for field in CommandField::ALL {
        let value = match field {
            CommandField::Description => string(&command.description),
            CommandField::Aliases => list(&command.aliases),
            CommandField::Permission => string(&command.permission),
            CommandField::PermissionMessage => string(&command.permission_message),
            CommandField::Usage => string(&command.usage),
        };
        if let Some(value) = value {
            body.insert(key(field.key()), value);
        }
    }
    Value::Mapping(body)
}

fn permission_value(permission: &Permission) -> Value {
    let mut body = Mapping::new();
    for field in PermissionField::ALL {
        let value = match field {
            PermissionField::Description => string(&permission.description),
            PermissionField::Default => permission.default.map(|default| key(default.literal())),
            PermissionField::Children => non_empty(permission.children(), permission_value),
        };
        if let Some(value) = value {
            body.insert(key(field.key()), value);
        }
    }
    Value::Mapping(body)
}

/// Named entities become `name: {...}` entries; an empty collection is omitted.
fn non_empty<T, F>(entities: &NamedContainer<T>, render: F) -> Option<Value>
where
    T: Named,
    F: Fn(&T) -> Value,
{
    if entities.is_empty() {
        return None;
    }
    let map: Mapping = entities
        .iter()
        .map(|entity| (key(entity.name()), render(entity)))
        .collect();
    Some(Value::Mapping(map))
}

fn key(s: &str) -> Value {
    Value::String(s.to_string())
}

/// Unset and empty strings are both left out.
fn string(value: &Option<String>) -> Option<Value> {
    value.as_deref().filter(|s| !s.is_empty()).map(key)
}

fn list(values: &Option<Vec<String>>) -> Option<Value> {
    values
        .as_ref()
        .filter(|items| !items.is_empty())
        .map(|items| Value::Sequence(items.iter().map(|item| key(item)).collect()))
}
