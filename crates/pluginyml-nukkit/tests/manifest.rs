use pluginyml_core::ManifestWriter;
use pluginyml_nukkit::{
    project, read_manifest, read_manifest_file, LoadOrder, PermissionDefault, PluginDescriptor,
    ProjectorOptions,
};
use serde_yaml::Value;

fn example_descriptor() -> PluginDescriptor {
    let mut descriptor = PluginDescriptor::new()
        .with_name("Example")
        .with_main("com.example.Main")
        .with_version("1.0");
    descriptor
        .configure_command("reload", |c| {
            c.description = Some("Reloads config".to_string());
        })
        .unwrap();
    descriptor
        .configure_permission("example.use", |p| {
            p.default = Some(PermissionDefault::Op);
            p.configure_child("example.use.admin", |admin| {
                admin.default = Some(PermissionDefault::NotOp);
            })
            .unwrap();
        })
        .unwrap();
    descriptor
}

#[test]
fn example_plugin_projects_to_expected_mapping() {
    let doc = project(&example_descriptor(), ProjectorOptions::strict()).unwrap();

    let expected: Value = serde_yaml::from_str(
        r#"
name: Example
main: com.example.Main
version: "1.0"
commands:
  reload:
    description: Reloads config
permissions:
  example.use:
    default: op
    children:
      example.use.admin:
        default: "!op"
"#,
    )
    .unwrap();
    assert_eq!(Value::from(doc.clone()), expected);

    let keys: Vec<_> = doc.keys().collect();
    assert_eq!(keys, ["name", "main", "version", "commands", "permissions"]);
}

#[test]
fn yaml_text_reparses_to_same_mapping() {
    let doc = project(&example_descriptor(), ProjectorOptions::default()).unwrap();
    let text = doc.to_yaml_string().unwrap();

    assert!(text.starts_with("name: Example\n"));
    let reparsed: Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(reparsed, Value::from(doc));
}

#[test]
fn collections_keep_first_request_order() {
    let mut descriptor = PluginDescriptor::new();
    for name in ["warp", "home", "spawn"] {
        descriptor.get_or_create_command(name).unwrap();
    }
    descriptor
        .configure_command("spawn", |c| c.usage = Some("/spawn".to_string()))
        .unwrap();
    descriptor
        .configure_command("warp", |c| c.usage = Some("/warp <name>".to_string()))
        .unwrap();
    descriptor.get_or_create_command("home").unwrap();

    let doc = project(&descriptor, ProjectorOptions::default()).unwrap();
    let commands: Vec<_> = doc
        .get("commands")
        .and_then(Value::as_mapping)
        .unwrap()
        .keys()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(commands, ["warp", "home", "spawn"]);
}

#[test]
fn deep_permission_tree_nests_children() {
    const DEPTH: usize = 5;
    let mut descriptor = PluginDescriptor::new();
    let mut node = descriptor.get_or_create_permission("p0").unwrap();
    for level in 1..DEPTH {
        node = node.get_or_create_child(&format!("p{level}")).unwrap();
    }
    assert_eq!(descriptor.permission("p0").unwrap().depth(), DEPTH - 1);

    let doc = project(&descriptor, ProjectorOptions::default()).unwrap();
    let mut value = &doc.get("permissions").unwrap()["p0"];
    for level in 1..DEPTH {
        value = &value["children"][format!("p{level}").as_str()];
    }
    assert_eq!(value.as_mapping().map(|m| m.len()), Some(0));
    assert!(value.get("children").is_none());
}

#[test]
fn unset_fields_never_leak() {
    let mut descriptor = PluginDescriptor::new().with_name("Quiet");
    descriptor.get_or_create_command("hush").unwrap();
    descriptor.get_or_create_permission("quiet.use").unwrap();

    let text = project(&descriptor, ProjectorOptions::default())
        .unwrap()
        .to_yaml_string()
        .unwrap();
    assert!(!text.contains("null"));
    assert!(!text.contains("~"));
    assert!(!text.contains("description"));
}

#[test]
fn enum_values_render_with_literals() {
    let mut descriptor = PluginDescriptor::new()
        .with_load(LoadOrder::Startup)
        .with_default_permission(PermissionDefault::False);
    for (name, default) in [
        ("a", PermissionDefault::True),
        ("b", PermissionDefault::False),
        ("c", PermissionDefault::Op),
        ("d", PermissionDefault::NotOp),
    ] {
        descriptor
            .configure_permission(name, |p| p.default = Some(default))
            .unwrap();
    }

    let doc = project(&descriptor, ProjectorOptions::default()).unwrap();
    assert_eq!(doc.get("load").and_then(Value::as_str), Some("STARTUP"));
    assert_eq!(doc.get("default-permission").and_then(Value::as_str), Some("false"));
    let permissions = doc.get("permissions").unwrap();
    let rendered: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|name| permissions[*name]["default"].as_str().unwrap())
        .collect();
    assert_eq!(rendered, ["true", "false", "op", "!op"]);
}

#[test]
fn written_manifest_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = example_descriptor()
        .with_soft_depend(["EconomyAPI"])
        .with_api(["1.0.0"]);
    let doc = project(&descriptor, ProjectorOptions::default()).unwrap();

    let path = ManifestWriter::new(dir.path().to_path_buf(), "plugin.yml")
        .write(&doc)
        .unwrap();
    let loaded = read_manifest_file(&path).unwrap();

    assert_eq!(loaded, descriptor);
    assert_eq!(read_manifest(&doc.to_yaml_string().unwrap()).unwrap(), descriptor);
}
