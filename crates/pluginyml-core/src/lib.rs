pub mod config;
pub mod error;
pub mod logging;
pub mod writer;

pub use config::{GeneratorConfig, LoggingConfig, OutputConfig, ProjectConfig, ValidationConfig};
pub use error::{CoreError, CoreResult};
pub use writer::{render_yaml, ManifestWriter};
