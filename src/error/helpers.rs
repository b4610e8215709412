use super::{ErrorCode, ShopError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to ShopError with context
    fn to_shop(self, context: impl Into<String>) -> Result<T, ShopError>;

    /// Convert to ShopError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, ShopError>;
    fn to_catalog_error(self, message: impl Into<String>) -> Result<T, ShopError>;
    fn to_script_error(self, message: impl Into<String>) -> Result<T, ShopError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_shop(self, context: impl Into<String>) -> Result<T, ShopError> {
        self.map_err(|e| ShopError::other(context).with_source(e))
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, ShopError> {
        self.map_err(|e| ShopError::config(message).with_source(e))
    }

    fn to_catalog_error(self, message: impl Into<String>) -> Result<T, ShopError> {
        self.map_err(|e| ShopError::catalog(message).with_source(e))
    }

    fn to_script_error(self, message: impl Into<String>) -> Result<T, ShopError> {
        self.map_err(|e| ShopError::script(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for a configuration file
    pub fn config_not_found(path: impl AsRef<Path>) -> ShopError {
        let path = path.as_ref();
        ShopError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.display()),
            Some(path.to_path_buf()),
        )
    }

    /// Create a not found error for a catalog file
    pub fn catalog_not_found(path: impl AsRef<Path>) -> ShopError {
        ShopError::catalog_with_code(
            ErrorCode::CATALOG_NOT_FOUND,
            format!("Catalog file not found: {}", path.as_ref().display()),
            None,
        )
    }

    /// Create a not found error for a script file
    pub fn script_not_found(path: impl AsRef<Path>) -> ShopError {
        let path = path.as_ref();
        ShopError::script_with_code(
            ErrorCode::SCRIPT_NOT_FOUND,
            format!("Script file not found: {}", path.display()),
            Some(path.to_path_buf()),
        )
    }
}
