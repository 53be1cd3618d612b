//! ErrorCode trait for stable, machine-readable failure codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "TABLE_MISSING").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORE_NOT_FOUND: &str = "STORE_NOT_FOUND";
pub const TABLE_MISSING: &str = "TABLE_MISSING";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_DISTRIBUTION: &str = "INVALID_DISTRIBUTION";
