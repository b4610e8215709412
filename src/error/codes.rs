/// Error code registry for cookiebox
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Catalog errors
/// - 3000-3999: Script errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_UNKNOWN_TIER: u16 = 1004;
    pub const CONFIG_PATH_ERROR: u16 = 1005;

    // Catalog errors (2000-2999)
    pub const CATALOG_GENERIC: u16 = 2000;
    pub const CATALOG_NOT_FOUND: u16 = 2001;
    pub const CATALOG_PARSE_ERROR: u16 = 2002;
    pub const CATALOG_DUPLICATE_ITEM: u16 = 2003;
    pub const CATALOG_DUPLICATE_TIER: u16 = 2004;
    pub const CATALOG_EMPTY_TIER: u16 = 2005;
    pub const CATALOG_INDIVIDUAL_TIER: u16 = 2006;
    pub const CATALOG_TIER_PRICE: u16 = 2007;
    pub const CATALOG_RATING_RANGE: u16 = 2008;

    // Script errors (3000-3999)
    pub const SCRIPT_GENERIC: u16 = 3000;
    pub const SCRIPT_NOT_FOUND: u16 = 3001;
    pub const SCRIPT_PARSE_ERROR: u16 = 3002;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Configuration file could not be parsed",
        1003 => "Invalid configuration value",
        1004 => "Default box size is not offered by the catalog",
        1005 => "Working directory could not be determined",

        // Catalog errors
        2000 => "Generic catalog error",
        2001 => "Catalog file not found",
        2002 => "Catalog file could not be parsed",
        2003 => "Duplicate catalog item id",
        2004 => "Duplicate box size",
        2005 => "Box size must be at least one",
        2006 => "Catalog needs exactly one individual tier",
        2007 => "Tier price missing or not allowed",
        2008 => "Testimonial rating out of range",

        // Script errors
        3000 => "Generic script error",
        3001 => "Script file not found",
        3002 => "Script file could not be parsed",

        // Other errors
        9000 => "Generic error",

        _ => "Unknown error code",
    }
}
