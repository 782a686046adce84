use crate::container::Named;

/// A command the plugin registers with the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    /// Permission node required to run the command. Not checked against
    /// declared permissions.
    pub permission: Option<String>,
    pub permission_message: Option<String>,
    pub usage: Option<String>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            aliases: None,
            permission: None,
            permission_message: None,
            usage: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Command {
    const KIND: &'static str = "command";

    fn with_name(name: String) -> Self {
        Command::new(name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
