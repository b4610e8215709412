use super::Catalog;
use crate::error::{common, ErrorCode, ErrorExt, Result, ShopError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read, parse and validate a YAML catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(common::catalog_not_found(path));
    }

    let content = fs::read_to_string(path)
        .to_catalog_error(format!("Cannot read catalog {}", path.display()))?;
    let catalog = parse_catalog(&content)?;

    debug!(
        "Loaded catalog from {} ({} items, {} tiers)",
        path.display(),
        catalog.items.len(),
        catalog.tiers.len()
    );
    Ok(catalog)
}

/// Parse and validate a catalog from YAML text
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(content).map_err(|e| {
        ShopError::catalog_with_code(
            ErrorCode::CATALOG_PARSE_ERROR,
            "catalog is not valid YAML",
            None,
        )
        .with_source(e)
    })?;
    catalog.validate()?;
    Ok(catalog)
}
