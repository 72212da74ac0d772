//! Build-time location of the axlockd helper binary.
//!
//! Distribution builds bake in an absolute path by setting `AXLOCKD_PATH`
//! when compiling:
//!
//! ```text
//! AXLOCKD_PATH=/usr/local/libexec/axlockd cargo build --release
//! ```
//!
//! Development builds leave it unset and the caller looks the helper up
//! at run time (see [`crate::locate`]).

use serde::{Serialize, Serializer};
use std::fmt;

/// Where the helper binary is expected to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaemonPath {
    /// Path baked in by the build, kept exactly as supplied.
    Configured(&'static str),
    /// No path was supplied; the caller must search at run time.
    Unset,
}

impl DaemonPath {
    /// Resolve from the `AXLOCKD_PATH` value captured at compile time.
    pub fn from_build() -> Self {
        Self::from_build_value(option_env!("AXLOCKD_PATH"))
    }

    /// Resolve from an explicit build value.
    ///
    /// The string is adopted verbatim, including the empty string.
    pub const fn from_build_value(value: Option<&'static str>) -> Self {
        match value {
            Some(path) => Self::Configured(path),
            None => Self::Unset,
        }
    }

    /// The configured path, or `None` for development builds.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Configured(path) => Some(*path),
            Self::Unset => None,
        }
    }

    pub const fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

impl fmt::Display for DaemonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(path) => f.write_str(path),
            Self::Unset => f.write_str("<unset>"),
        }
    }
}

impl Serialize for DaemonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_path_is_verbatim() {
        let path = DaemonPath::from_build_value(Some("/usr/local/libexec/axlockd"));
        assert_eq!(path, DaemonPath::Configured("/usr/local/libexec/axlockd"));
        assert_eq!(path.as_str(), Some("/usr/local/libexec/axlockd"));
        assert!(path.is_configured());
    }

    #[test]
    fn test_no_normalization() {
        let raw = " /opt/ax//libexec/../libexec/axlockd ";
        let path = DaemonPath::from_build_value(Some(raw));
        assert_eq!(path.as_str(), Some(raw));
    }

    #[test]
    fn test_empty_string_passes_through() {
        let path = DaemonPath::from_build_value(Some(""));
        assert_eq!(path, DaemonPath::Configured(""));
        assert_eq!(path.as_str(), Some(""));
        assert!(path.is_configured());
    }

    #[test]
    fn test_omitted_is_unset() {
        let path = DaemonPath::from_build_value(None);
        assert_eq!(path, DaemonPath::Unset);
        assert_eq!(path.as_str(), None);
        assert!(!path.is_configured());
        assert_ne!(path, DaemonPath::from_build_value(Some("")));
    }

    #[test]
    fn test_from_build_matches_compile_env() {
        let expected = option_env!("AXLOCKD_PATH");
        assert_eq!(DaemonPath::from_build().as_str(), expected);
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let first = DaemonPath::from_build();
        let second = DaemonPath::from_build();
        assert_eq!(first, second);
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DaemonPath::Configured("/usr/local/libexec/axlockd").to_string(),
            "/usr/local/libexec/axlockd"
        );
        assert_eq!(DaemonPath::Unset.to_string(), "<unset>");
    }

    #[test]
    fn test_serialize() {
        let configured = serde_json::to_value(DaemonPath::Configured("/usr/libexec/axlockd")).unwrap();
        assert_eq!(configured, serde_json::json!("/usr/libexec/axlockd"));

        let unset = serde_json::to_value(DaemonPath::Unset).unwrap();
        assert!(unset.is_null());
    }
}
