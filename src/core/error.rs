use std::fmt;

/// Error types for productdash operations
#[derive(Debug)]
pub enum DashError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// CSV reader error (unreadable file, broken quoting, ...)
    Csv(csv::Error),

    /// Required columns absent from the CSV header
    MissingColumns(Vec<String>),

    /// A field could not be converted to its column type
    Parse { line: u64, message: String },

    /// Figure serialization error
    Serialization(serde_json::Error),

    /// Listener could not be bound
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// HTTP server failed while running
    Server(std::io::Error),
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Io(err) => write!(f, "IO error: {err}"),
            DashError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DashError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            DashError::FileNotFound(path) => write!(f, "File not found: {path}"),
            DashError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            DashError::Csv(err) => write!(f, "CSV error: {err}"),
            DashError::MissingColumns(columns) => {
                write!(f, "Missing required column(s): {}", columns.join(", "))
            }
            DashError::Parse { line, message } => {
                write!(f, "Parse error at line {line}: {message}")
            }
            DashError::Serialization(err) => write!(f, "Serialization error: {err}"),
            DashError::Bind { addr, source } => write!(f, "Could not bind {addr}: {source}"),
            DashError::Server(err) => write!(f, "Server error: {err}"),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Io(err) => Some(err),
            DashError::TomlParsing(err) => Some(err),
            DashError::Csv(err) => Some(err),
            DashError::Serialization(err) => Some(err),
            DashError::Bind { source, .. } => Some(source),
            DashError::Server(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        DashError::Io(err)
    }
}

impl From<toml::de::Error> for DashError {
    fn from(err: toml::de::Error) -> Self {
        DashError::TomlParsing(err)
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        DashError::Csv(err)
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Serialization(err)
    }
}

/// Type alias for Results using DashError
pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = DashError::Config("Invalid port".to_string());
        assert_eq!(format!("{config_error}"), "Configuration error: Invalid port");

        let file_error = DashError::FileNotFound("/path/to/data.csv".to_string());
        assert_eq!(format!("{file_error}"), "File not found: /path/to/data.csv");
    }

    #[test]
    fn test_missing_columns_names_every_column() {
        let err = DashError::MissingColumns(vec!["Price".to_string(), "Brand".to_string()]);
        assert_eq!(format!("{err}"), "Missing required column(s): Price, Brand");
    }

    #[test]
    fn test_parse_error_display() {
        let err = DashError::Parse {
            line: 7,
            message: "invalid float literal".to_string(),
        };
        assert_eq!(format!("{err}"), "Parse error at line 7: invalid float literal");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let dash_error = DashError::from(io_error);

        match dash_error {
            DashError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let dash_error = DashError::from(toml_error);
        assert!(matches!(dash_error, DashError::TomlParsing(_)));
        assert!(dash_error.source().is_some());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let dash_error = DashError::from(json_error);
        assert!(matches!(dash_error, DashError::Serialization(_)));
        assert!(format!("{dash_error}").contains("Serialization error:"));
    }

    #[test]
    fn test_bind_error_keeps_source() {
        let err = DashError::Bind {
            addr: "127.0.0.1:8050".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert!(format!("{err}").contains("127.0.0.1:8050"));
        assert!(err.source().unwrap().to_string().contains("address in use"));
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            DashError::Config("test".to_string()),
            DashError::FileNotFound("test".to_string()),
            DashError::InvalidArgument("test".to_string()),
            DashError::MissingColumns(vec!["Brand".to_string()]),
            DashError::Parse {
                line: 2,
                message: "test".to_string(),
            },
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DashError>();
    }
}
