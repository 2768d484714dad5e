/// Defaults, file handling and validation for `Configuration`.
pub mod configuration;

/// `Display` and `Error` for `ConfigurationError`.
pub mod configuration_error;
