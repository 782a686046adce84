use pluginyml_nukkit::{
    Command, DescriptorResult, LoadOrder, Permission, PermissionDefault, PluginDescriptor,
};
use serde::Deserialize;

/// JSON form of the plugin block of a build script.
///
/// Commands and permissions are lists so their order survives parsing. A
/// name listed twice configures the same entity again.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PluginDefinition {
    pub name: Option<String>,
    pub main: Option<String>,
    pub version: Option<String>,
    pub api: Option<Vec<String>>,
    pub description: Option<String>,
    pub load: Option<String>,
    pub author: Option<String>,
    pub authors: Option<Vec<String>>,
    pub website: Option<String>,
    pub depend: Option<Vec<String>>,
    pub soft_depend: Option<Vec<String>>,
    pub load_before: Option<Vec<String>>,
    pub prefix: Option<String>,
    pub default_permission: Option<String>,
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
    #[serde(default)]
    pub permissions: Vec<PermissionDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandDefinition {
    pub name: String,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub permission: Option<String>,
    pub permission_message: Option<String>,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PermissionDefinition {
    pub name: String,
    pub description: Option<String>,
    pub default: Option<String>,
    #[serde(default)]
    pub children: Vec<PermissionDefinition>,
}

fn set<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

impl PluginDefinition {
    pub fn apply(&self, descriptor: &mut PluginDescriptor) -> DescriptorResult<()> {
        set(&mut descriptor.name, &self.name);
        set(&mut descriptor.main, &self.main);
        set(&mut descriptor.version, &self.version);
        set(&mut descriptor.api, &self.api);
        set(&mut descriptor.description, &self.description);
        if let Some(load) = &self.load {
            descriptor.load = Some(load.parse::<LoadOrder>()?);
        }
        set(&mut descriptor.author, &self.author);
        set(&mut descriptor.authors, &self.authors);
        set(&mut descriptor.website, &self.website);
        set(&mut descriptor.depend, &self.depend);
        set(&mut descriptor.soft_depend, &self.soft_depend);
        set(&mut descriptor.load_before, &self.load_before);
        set(&mut descriptor.prefix, &self.prefix);
        if let Some(default) = &self.default_permission {
            descriptor.default_permission = Some(default.parse::<PermissionDefault>()?);
        }

        for command in &self.commands {
            command.apply(descriptor.get_or_create_command(&command.name)?);
        }
        for permission in &self.permissions {
            permission.apply(descriptor.get_or_create_permission(&permission.name)?)?;
        }
        Ok(())
    }
}

impl CommandDefinition {
    fn apply(&self, command: &mut Command) {
        set(&mut command.description, &self.description);
        set(&mut command.aliases, &self.aliases);
        set(&mut command.permission, &self.permission);
        set(&mut command.permission_message, &self.permission_message);
        set(&mut command.usage, &self.usage);
    }
}

impl PermissionDefinition {
    fn apply(&self, permission: &mut Permission) -> DescriptorResult<()> {
        set(&mut permission.description, &self.description);
        if let Some(default) = &self.default {
            permission.default = Some(default.parse::<PermissionDefault>()?);
        }
        for child in &self.children {
            child.apply(permission.get_or_create_child(&child.name)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluginyml_nukkit::DescriptorError;

    fn parse(json: &str) -> PluginDefinition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn applies_nested_definition() {
        let definition = parse(
            r#"{
                "name": "Example",
                "main": "com.example.Main",
                "version": "1.0",
                "load": "POSTWORLD",
                "softDepend": ["EconomyAPI"],
                "defaultPermission": "op",
                "commands": [
                    { "name": "reload", "description": "Reloads config", "permissionMessage": "Nope" }
                ],
                "permissions": [
                    { "name": "example.use", "default": "op", "children": [
                        { "name": "example.use.admin", "default": "!op" }
                    ] }
                ]
            }"#,
        );
        let mut descriptor = PluginDescriptor::new();
        definition.apply(&mut descriptor).unwrap();

        assert_eq!(descriptor.load, Some(LoadOrder::PostWorld));
        assert_eq!(descriptor.soft_depend, Some(vec!["EconomyAPI".to_string()]));
        assert_eq!(
            descriptor
                .command("reload")
                .and_then(|c| c.permission_message.as_deref()),
            Some("Nope")
        );
        let admin = descriptor
            .permission("example.use")
            .and_then(|p| p.child("example.use.admin"))
            .unwrap();
        assert_eq!(admin.default, Some(PermissionDefault::NotOp));
    }

    #[test]
    fn repeated_names_accumulate() {
        let definition = parse(
            r#"{ "commands": [
                { "name": "spawn", "usage": "/spawn" },
                { "name": "home" },
                { "name": "spawn", "aliases": ["s"] }
            ] }"#,
        );
        let mut descriptor = PluginDescriptor::new();
        definition.apply(&mut descriptor).unwrap();

        let names: Vec<_> = descriptor.commands().names().collect();
        assert_eq!(names, ["spawn", "home"]);
        let spawn = descriptor.command("spawn").unwrap();
        assert_eq!(spawn.usage.as_deref(), Some("/spawn"));
        assert_eq!(spawn.aliases, Some(vec!["s".to_string()]));
    }

    #[test]
    fn bad_enum_literal_is_reported() {
        let definition = parse(r#"{ "permissions": [ { "name": "a", "default": "sometimes" } ] }"#);
        let err = definition.apply(&mut PluginDescriptor::new()).unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidValue { .. }));
    }

    #[test]
    fn blank_command_name_is_reported() {
        let definition = parse(r#"{ "commands": [ { "name": "" } ] }"#);
        let err = definition.apply(&mut PluginDescriptor::new()).unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidName { kind: "command" }));
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = serde_json::from_str::<PluginDefinition>(r#"{ "mainClass": "x" }"#);
        assert!(result.is_err());
    }
}
