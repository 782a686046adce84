//! Rename tables between model fields and `plugin.yml` keys.
//!
//! Every key the projector emits and the reader accepts is listed here, in
//! output order.

use crate::descriptor::LoadOrder;
use crate::permissions::PermissionDefault;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorField {
    Name,
    Main,
    Version,
    Api,
    Description,
    Load,
    Author,
    Authors,
    Website,
    Depend,
    SoftDepend,
    LoadBefore,
    Prefix,
    DefaultPermission,
    Commands,
    Permissions,
}

impl DescriptorField {
    pub const ALL: [DescriptorField; 16] = [
        DescriptorField::Name,
        DescriptorField::Main,
        DescriptorField::Version,
        DescriptorField::Api,
        DescriptorField::Description,
        DescriptorField::Load,
        DescriptorField::Author,
        DescriptorField::Authors,
        DescriptorField::Website,
        DescriptorField::Depend,
        DescriptorField::SoftDepend,
        DescriptorField::LoadBefore,
        DescriptorField::Prefix,
        DescriptorField::DefaultPermission,
        DescriptorField::Commands,
        DescriptorField::Permissions,
    ];

    /// Fields Nukkit refuses to load a plugin without.
    pub const REQUIRED: [DescriptorField; 3] = [
        DescriptorField::Name,
        DescriptorField::Main,
        DescriptorField::Version,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DescriptorField::Name => "name",
            DescriptorField::Main => "main",
            DescriptorField::Version => "version",
            DescriptorField::Api => "api",
            DescriptorField::Description => "description",
            DescriptorField::Load => "load",
            DescriptorField::Author => "author",
            DescriptorField::Authors => "authors",
            DescriptorField::Website => "website",
            DescriptorField::Depend => "depend",
            DescriptorField::SoftDepend => "softdepend",
            DescriptorField::LoadBefore => "loadbefore",
            DescriptorField::Prefix => "prefix",
            DescriptorField::DefaultPermission => "default-permission",
            DescriptorField::Commands => "commands",
            DescriptorField::Permissions => "permissions",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandField {
    Description,
    Aliases,
    Permission,
    PermissionMessage,
    Usage,
}

impl CommandField {
    pub const ALL: [CommandField; 5] = [
        CommandField::Description,
        CommandField::Aliases,
        CommandField::Permission,
        CommandField::PermissionMessage,
        CommandField::Usage,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CommandField::Description => "description",
            CommandField::Aliases => "aliases",
            CommandField::Permission => "permission",
            CommandField::PermissionMessage => "permission-message",
            CommandField::Usage => "usage",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionField {
    Description,
    Default,
    Children,
}

impl PermissionField {
    pub const ALL: [PermissionField; 3] = [
        PermissionField::Description,
        PermissionField::Default,
        PermissionField::Children,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PermissionField::Description => "description",
            PermissionField::Default => "default",
            PermissionField::Children => "children",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

pub const LOAD_ORDER_LITERALS: [(LoadOrder, &str); 2] = [
    (LoadOrder::Startup, "STARTUP"),
    (LoadOrder::PostWorld, "POSTWORLD"),
];

pub const PERMISSION_DEFAULT_LITERALS: [(PermissionDefault, &str); 4] = [
    (PermissionDefault::True, "true"),
    (PermissionDefault::False, "false"),
    (PermissionDefault::Op, "op"),
    (PermissionDefault::NotOp, "!op"),
];

/// Spellings the server accepts on load besides the canonical literals.
pub const PERMISSION_DEFAULT_ALIASES: [(PermissionDefault, &str); 10] = [
    (PermissionDefault::Op, "isop"),
    (PermissionDefault::Op, "operator"),
    (PermissionDefault::Op, "isoperator"),
    (PermissionDefault::Op, "admin"),
    (PermissionDefault::Op, "isadmin"),
    (PermissionDefault::NotOp, "notop"),
    (PermissionDefault::NotOp, "!operator"),
    (PermissionDefault::NotOp, "notoperator"),
    (PermissionDefault::NotOp, "!admin"),
    (PermissionDefault::NotOp, "notadmin"),
];

pub(crate) fn literal_of<T: Copy + PartialEq>(table: &[(T, &'static str)], value: T) -> &'static str {
    table
        .iter()
        .find(|(variant, _)| *variant == value)
        .map(|(_, literal)| *literal)
        .unwrap_or_default()
}

pub(crate) fn variant_of<T: Copy>(table: &[(T, &'static str)], literal: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, candidate)| candidate.eq_ignore_ascii_case(literal))
        .map(|(variant, _)| *variant)
}
