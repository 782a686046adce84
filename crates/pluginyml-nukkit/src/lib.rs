//! Nukkit `plugin.yml` descriptor model and projection.
//!
//! Build a [`PluginDescriptor`], configure commands and permissions by name,
//! then [`project`] it into an ordered [`ManifestDocument`] for writing.

pub mod command;
pub mod container;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod keys;
pub mod loader;
pub mod permissions;
pub mod projector;

pub use command::Command;
pub use container::{Named, NamedContainer};
pub use descriptor::{LoadOrder, PluginDescriptor};
pub use document::ManifestDocument;
pub use error::{DescriptorError, DescriptorResult};
pub use loader::{read_manifest, read_manifest_file, LoadedManifest, ManifestLoader};
pub use permissions::{Permission, PermissionDefault};
pub use projector::{project, ProjectorOptions};
