use pluginyml_core::CoreError;
use thiserror::Error;

pub type DescriptorResult<T> = Result<T, DescriptorError>;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("invalid {kind} name: names must not be empty")]
    InvalidName { kind: &'static str },
    #[error("{kind} '{name}' is indexed but missing from its collection")]
    DuplicateState { kind: &'static str, name: String },
    #[error("missing required field '{0}'")]
    MissingRequiredField(&'static str),
    #[error("invalid value {value:?} for '{field}'")]
    InvalidValue { field: String, value: String },
    #[error("'{field}' must be {expected}")]
    UnexpectedType { field: String, expected: &'static str },
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
}
