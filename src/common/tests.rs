#[cfg(test)]
mod common_tests {
    use crate::common::common::{is_lower_hex, log_level_filter};

    #[test]
    fn test_is_lower_hex() {
        assert!(is_lower_hex("0123456789abcdef"));
        assert!(!is_lower_hex(""));
        assert!(!is_lower_hex("0123456789ABCDEF"));
        assert!(!is_lower_hex("g0"));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log_level_filter("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(log_level_filter("off"), Some(log::LevelFilter::Off));
        assert_eq!(log_level_filter("verbose"), None);
    }
}
