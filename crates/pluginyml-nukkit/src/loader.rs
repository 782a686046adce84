use crate::command::Command;
use crate::descriptor::{LoadOrder, PluginDescriptor};
use crate::error::{DescriptorError, DescriptorResult};
use crate::keys::{CommandField, DescriptorField, PermissionField};
use crate::permissions::{Permission, PermissionDefault};
use pluginyml_core::config::DEFAULT_MANIFEST_NAME;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub descriptor: PluginDescriptor,
    pub root_dir: PathBuf,
}

/// Finds `plugin.yml` files one directory below a root.
pub struct ManifestLoader {
    root: PathBuf,
}

impl ManifestLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn discover(&self) -> DescriptorResult<Vec<LoadedManifest>> {
        let mut items = Vec::new();
        if !self.root.exists() {
            return Ok(items);
        }
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                let manifest_path = path.join(DEFAULT_MANIFEST_NAME);
                if manifest_path.exists() {
                    let descriptor = read_manifest_file(&manifest_path)?;
                    items.push(LoadedManifest {
                        descriptor,
                        root_dir: path,
                    });
                }
            }
        }
        items.sort_by(|a, b| a.root_dir.cmp(&b.root_dir));
        info!(root = %self.root.display(), count = items.len(), "manifests discovered");
        Ok(items)
    }
}

pub fn read_manifest_file(path: &Path) -> DescriptorResult<PluginDescriptor> {
    let data = fs::read_to_string(path)?;
    read_manifest(&data)
}

/// Parses `plugin.yml` text back into a descriptor.
pub fn read_manifest(text: &str) -> DescriptorResult<PluginDescriptor> {
    let value: Value = serde_yaml::from_str(text)?;
    match value {
        Value::Null => Ok(PluginDescriptor::new()),
        Value::Mapping(root) => descriptor_from_mapping(&root),
        _ => Err(DescriptorError::UnexpectedType {
            field: "<root>".to_string(),
            expected: "a mapping",
        }),
    }
}

fn descriptor_from_mapping(root: &Mapping) -> DescriptorResult<PluginDescriptor> {
    let mut descriptor = PluginDescriptor::new();
    for (raw_key, value) in root {
        let key = key_str("<root>", raw_key)?;
        let Some(field) = DescriptorField::from_key(key) else {
            warn!(key, "ignoring unknown plugin.yml key");
            continue;
        };
        match field {
            DescriptorField::Name => descriptor.name = string(key, value)?,
            DescriptorField::Main => descriptor.main = string(key, value)?,
            DescriptorField::Version => descriptor.version = string(key, value)?,
            DescriptorField::Api => descriptor.api = list(key, value)?,
            DescriptorField::Description => descriptor.description = string(key, value)?,
            DescriptorField::Load => {
                descriptor.load = string(key, value)?
                    .map(|s| s.parse::<LoadOrder>())
                    .transpose()?
            }
            DescriptorField::Author => descriptor.author = string(key, value)?,
            DescriptorField::Authors => descriptor.authors = list(key, value)?,
            DescriptorField::Website => descriptor.website = string(key, value)?,
            DescriptorField::Depend => descriptor.depend = list(key, value)?,
            DescriptorField::SoftDepend => descriptor.soft_depend = list(key, value)?,
            DescriptorField::LoadBefore => descriptor.load_before = list(key, value)?,
            DescriptorField::Prefix => descriptor.prefix = string(key, value)?,
            DescriptorField::DefaultPermission => {
                descriptor.default_permission = string(key, value)?
                    .map(|s| s.parse::<PermissionDefault>())
                    .transpose()
                    .map_err(|_| invalid(key, value))?
            }
            DescriptorField::Commands => {
                for (name, body) in entries(key, value)? {
                    let command = descriptor.get_or_create_command(name)?;
                    read_command(&format!("{key}.{name}"), command, body)?;
                }
            }
            DescriptorField::Permissions => {
                for (name, body) in entries(key, value)? {
                    let permission = descriptor.get_or_create_permission(name)?;
                    read_permission(&format!("{key}.{name}"), permission, body)?;
                }
            }
        }
    }
    Ok(descriptor)
}

fn read_command(path: &str, command: &mut Command, body: &Value) -> DescriptorResult<()> {
    let Some(body) = body_mapping(path, body)? else {
        return Ok(());
    };
    for (raw_key, value) in body {
        let key = key_str(path, raw_key)?;
        let field_path = format!("{path}.{key}");
        match CommandField::from_key(key) {
            Some(CommandField::Description) => command.description = string(&field_path, value)?,
            Some(CommandField::Aliases) => command.aliases = list(&field_path, value)?,
            Some(CommandField::Permission) => command.permission = string(&field_path, value)?,
            Some(CommandField::PermissionMessage) => {
                command.permission_message = string(&field_path, value)?
            }
            Some(CommandField::Usage) => command.usage = string(&field_path, value)?,
            None => warn!(key = %field_path, "ignoring unknown command key"),
        }
    }
    Ok(())
}

fn read_permission(path: &str, permission: &mut Permission, body: &Value) -> DescriptorResult<()> {
    let Some(body) = body_mapping(path, body)? else {
        return Ok(());
    };
    for (raw_key, value) in body {
        let key = key_str(path, raw_key)?;
        let field_path = format!("{path}.{key}");
        match PermissionField::from_key(key) {
            Some(PermissionField::Description) => {
                permission.description = string(&field_path, value)?
            }
            Some(PermissionField::Default) => {
                permission.default = string(&field_path, value)?
                    .map(|s| s.parse::<PermissionDefault>())
                    .transpose()
                    .map_err(|_| invalid(&field_path, value))?
            }
            Some(PermissionField::Children) => {
                for (name, child_body) in entries(&field_path, value)? {
                    let child = permission.get_or_create_child(name)?;
                    read_permission(&format!("{field_path}.{name}"), child, child_body)?;
                }
            }
            None => warn!(key = %field_path, "ignoring unknown permission key"),
        }
    }
    Ok(())
}

fn body_mapping<'a>(path: &str, body: &'a Value) -> DescriptorResult<Option<&'a Mapping>> {
    match body {
        Value::Null => Ok(None),
        Value::Mapping(map) => Ok(Some(map)),
        _ => Err(unexpected(path, "a mapping")),
    }
}

fn entries<'a>(path: &str, value: &'a Value) -> DescriptorResult<Vec<(&'a str, &'a Value)>> {
    let Some(map) = body_mapping(path, value)? else {
        return Ok(Vec::new());
    };
    map.iter()
        .map(|(name, body)| Ok((key_str(path, name)?, body)))
        .collect()
}

fn key_str<'a>(path: &str, key: &'a Value) -> DescriptorResult<&'a str> {
    key.as_str().ok_or_else(|| unexpected(path, "keyed by strings"))
}

fn string(path: &str, value: &Value) -> DescriptorResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        // A float has already lost its spelling (`1.10` parses as 1.1).
        Value::Number(n) if n.is_f64() => Err(unexpected(path, "a string (quote the value)")),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(unexpected(path, "a string")),
    }
}

/// Nukkit accepts a lone scalar wherever a list is expected.
fn list(path: &str, value: &Value) -> DescriptorResult<Option<Vec<String>>> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| string(path, item)?.ok_or_else(|| unexpected(path, "a list of strings")))
            .collect::<DescriptorResult<Vec<_>>>()
            .map(Some),
        other => Ok(string(path, other)?.map(|s| vec![s])),
    }
}

fn unexpected(path: &str, expected: &'static str) -> DescriptorError {
    DescriptorError::UnexpectedType {
        field: path.to_string(),
        expected,
    }
}

fn invalid(path: &str, value: &Value) -> DescriptorError {
    DescriptorError::InvalidValue {
        field: path.to_string(),
        value: string(path, value).ok().flatten().unwrap_or_default(),
    }
}
