use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;


pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for the cookiebox library and binary.
///
/// Session transitions never produce one of these: guarded no-ops and
/// shipping validation failures are reported through `Outcome`. Errors only
/// arise at the boundary where configuration, catalog and script files are
/// read.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Catalog error: {message}")]
    Catalog {
        code: u16,
        message: String,
        entry: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Script error: {message}")]
    Script {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ShopError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a catalog error with default code
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            code: ErrorCode::CATALOG_GENERIC,
            message: message.into(),
            entry: None,
            source: None,
        }
    }

    /// Create a catalog error with specific code, naming the offending entry
    pub fn catalog_with_code(code: u16, message: impl Into<String>, entry: Option<String>) -> Self {
        Self::Catalog {
            code,
            message: message.into(),
            entry,
            source: None,
        }
    }

    /// Create a script error with default code
    pub fn script(message: impl Into<String>) -> Self {
        Self::Script {
            code: ErrorCode::SCRIPT_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a script error with specific code and path
    pub fn script_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Script {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Catalog { source: src, .. }
            | Self::Script { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Catalog { .. } => 3,
            Self::Script { .. } => 4,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Catalog { code, .. }
            | Self::Script { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Terminal report: code, what went wrong, and what the code means
    pub fn report(&self) -> String {
        format!(
            "[E{:04}] {}\n  {}",
            self.code(),
            self.user_message(),
            describe_error_code(self.code())
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Catalog { message, entry, .. } => match entry {
                Some(e) => format!("Catalog entry '{}' is invalid: {}", e, message),
                None => format!("Catalog is invalid: {}", message),
            },
            Self::Script { message, path, .. } => match path {
                Some(p) => format!("Script {} failed: {}", p.display(), message),
                None => format!("Script failed: {}", message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }
}

/// Type alias for Results using ShopError
pub type Result<T> = std::result::Result<T, ShopError>;
