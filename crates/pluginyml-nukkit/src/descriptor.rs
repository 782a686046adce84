use crate::command::Command;
use crate::container::NamedContainer;
use crate::error::{DescriptorError, DescriptorResult};
use crate::keys::{self, LOAD_ORDER_LITERALS};
use crate::permissions::{Permission, PermissionDefault};
use pluginyml_core::ProjectConfig;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// When the server enables the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOrder {
    Startup,
    PostWorld,
}

impl LoadOrder {
    pub fn literal(self) -> &'static str {
        keys::literal_of(&LOAD_ORDER_LITERALS, self)
    }
}

impl fmt::Display for LoadOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl FromStr for LoadOrder {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        keys::variant_of(&LOAD_ORDER_LITERALS, s.trim()).ok_or_else(|| DescriptorError::InvalidValue {
            field: "load".to_string(),
            value: s.to_string(),
        })
    }
}

/// The contents of a Nukkit `plugin.yml`.
///
/// Scalar fields are plain public options; `None` means "not set" and is left
/// out of the generated manifest. Commands and permissions are created on
/// first reference by name and kept in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginDescriptor {
    pub name: Option<String>,
    pub main: Option<String>,
    pub version: Option<String>,
    pub api: Option<Vec<String>>,
    pub description: Option<String>,
    pub load: Option<LoadOrder>,
    pub author: Option<String>,
    pub authors: Option<Vec<String>>,
    pub website: Option<String>,
    pub depend: Option<Vec<String>>,
    pub soft_depend: Option<Vec<String>>,
    pub load_before: Option<Vec<String>>,
    pub prefix: Option<String>,
    pub default_permission: Option<PermissionDefault>,
    commands: NamedContainer<Command>,
    permissions: NamedContainer<Permission>,
}

macro_rules! string_setters {
    ($($method:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $method(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

macro_rules! list_setters {
    ($($method:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $method<I, S>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.$field = Some(values.into_iter().map(Into::into).collect());
                self
            }
        )*
    };
}

impl PluginDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    string_setters! {
        with_name => name,
        with_main => main,
        with_version => version,
        with_description => description,
        with_author => author,
        with_website => website,
        with_prefix => prefix,
    }

    list_setters! {
        with_api => api,
        with_authors => authors,
        with_depend => depend,
        with_soft_depend => soft_depend,
        with_load_before => load_before,
    }

    pub fn with_load(mut self, load: LoadOrder) -> Self {
        self.load = Some(load);
        self
    }

    pub fn with_default_permission(mut self, default: PermissionDefault) -> Self {
        self.default_permission = Some(default);
        self
    }

    pub fn commands(&self) -> &NamedContainer<Command> {
        &self.commands
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn get_or_create_command(&mut self, name: &str) -> DescriptorResult<&mut Command> {
        self.commands.get_or_create(name)
    }

    pub fn configure_command<F>(&mut self, name: &str, f: F) -> DescriptorResult<()>
    where
        F: FnOnce(&mut Command),
    {
        self.commands.configure(name, f)
    }

    pub fn permissions(&self) -> &NamedContainer<Permission> {
        &self.permissions
    }

    pub fn permission(&self, name: &str) -> Option<&Permission> {
        self.permissions.get(name)
    }

    pub fn get_or_create_permission(&mut self, name: &str) -> DescriptorResult<&mut Permission> {
        self.permissions.get_or_create(name)
    }

    pub fn configure_permission<F>(&mut self, name: &str, f: F) -> DescriptorResult<()>
    where
        F: FnOnce(&mut Permission),
    {
        self.permissions.configure(name, f)
    }

    /// Fills fields the build left unset from the project's own metadata.
    pub fn apply_project_defaults(&mut self, project: &ProjectConfig) {
        fill(&mut self.name, &project.name);
        fill(&mut self.version, &project.version);
        fill(&mut self.description, &project.description);
        fill(&mut self.website, &project.url);
        if self.authors.is_none() && !project.authors.is_empty() {
            self.authors = Some(project.authors.clone());
        }
        debug!(name = ?self.name, version = ?self.version, "project defaults applied");
    }
}

fn fill(slot: &mut Option<String>, fallback: &Option<String>) {
    if slot.is_none() {
        slot.clone_from(fallback);
    }
}
