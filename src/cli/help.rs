//! Log filter selection

/// Filter for the `-v` count, or the configured level when no flag is given
pub fn get_log_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_lowercase(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_config() {
        assert_eq!(get_log_level(0, "WARN"), "warn");
        assert_eq!(get_log_level(1, "warn"), "debug");
        assert_eq!(get_log_level(2, "warn"), "trace");
        assert_eq!(get_log_level(5, "info"), "trace");
    }
}
