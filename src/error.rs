use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Config directory not found at {0}. Run 'portal init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {reason}")]
    ConfigWrite { path: PathBuf, reason: String },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Invalid page size {0}. [view] page_size must be greater than 0")]
    InvalidPageSize(usize),

    #[error("Service '{0}' is defined more than once in services.toml")]
    DuplicateService(String),

    #[error("Service '{0}' has a negative amount. Amounts in services.toml must be 0 or more")]
    NegativeAmount(String),

    #[error("Service '{0}' not found in services.toml")]
    ServiceNotFound(String),

    #[error("Client '{0}' not found in clients.toml")]
    ClientNotFound(String),

    #[error("Notification #{0} not found")]
    NotificationNotFound(u32),

    #[error("Invalid file type '{mime}' for {file}. Only images or PDF documents can be attached.")]
    InvalidFileType { file: String, mime: String },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("New password must not be empty")]
    EmptyPassword,

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortalError>;
