//! Unified error types for linkseeker.
//!
//! Every failure in a run is terminal; each variant maps to a distinct
//! process exit code so scripts can tell render failures from write failures.

/// Unified error type for the linkseeker pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Target URL could not be parsed or uses a non-http(s) scheme.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration failed to load or validate.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Host platform is not supported.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// DNS resolution failed for the target host.
    #[error("unknown host: {0}")]
    HostNotFound(String),

    /// Browser engine failure (launch, navigation, script execution).
    #[error("render failed: {0}")]
    Render(String),

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code for this failure.
    ///
    /// Usage and configuration problems exit 2; environment and runtime
    /// failures get distinct codes so callers can branch on them.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidUrl(_) | Error::Config(_) => 2,
            Error::UnsupportedPlatform(_) => 3,
            Error::HostNotFound(_) => 4,
            Error::Render(_) => 5,
            Error::Output { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HostNotFound("nosuchhost.invalid".to_string());
        assert!(err.to_string().contains("unknown host"));
        assert!(err.to_string().contains("nosuchhost.invalid"));
    }

    #[test]
    fn test_exit_codes_distinct() {
        let errs = [
            Error::InvalidUrl("x".into()),
            Error::UnsupportedPlatform("windows".into()),
            Error::HostNotFound("x".into()),
            Error::Render("x".into()),
            Error::Output {
                path: "out.txt".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        ];
        for err in &errs {
            assert_ne!(err.exit_code(), 0);
        }
        assert_eq!(errs[0].exit_code(), 2);
        assert_eq!(errs[1].exit_code(), 3);
        assert_eq!(errs[2].exit_code(), 4);
        assert_eq!(errs[3].exit_code(), 5);
        assert_eq!(errs[4].exit_code(), 6);
    }

    #[test]
    fn test_output_error_keeps_path() {
        let err = Error::Output {
            path: "/tmp/links.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/links.txt"));
    }
}
