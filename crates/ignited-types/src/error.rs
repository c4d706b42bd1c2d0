//! Error types for Ignited.

use std::io;

/// Errors produced by the Ignited settings layer.
#[derive(Debug, thiserror::Error)]
pub enum IgnitedError {
    #[error("store error: {0}")]
    Store(String),

    #[error("skin catalog error: {0}")]
    Catalog(String),

    #[error("game library error: {0}")]
    Library(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("feature error: {0}")]
    Feature(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, IgnitedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let e = IgnitedError::Store("lock poisoned".into());
        assert_eq!(format!("{e}"), "store error: lock poisoned");
    }

    #[test]
    fn catalog_error_display() {
        let e = IgnitedError::Catalog("query failed".into());
        assert_eq!(format!("{e}"), "skin catalog error: query failed");
    }

    #[test]
    fn library_error_display() {
        let e = IgnitedError::Library("no such game: abc".into());
        assert_eq!(format!("{e}"), "game library error: no such game: abc");
    }

    #[test]
    fn feature_error_display() {
        let e = IgnitedError::Feature("value out of range".into());
        assert_eq!(format!("{e}"), "feature error: value out of range");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let e: IgnitedError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("key = [[[").unwrap_err();
        let e: IgnitedError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let e: IgnitedError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(IgnitedError::Parse("bad orientation".into()));
        assert!(r.is_err());
    }
}
