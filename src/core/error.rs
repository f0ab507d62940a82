use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    InvalidArgument,
    InvalidQuery,
    MalformedRecord,
    DataSourceUnavailable,
    UnknownStrategyName,
    InvalidConfig,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn invalid_query(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidQuery, context.into())
    }

    pub fn malformed_record(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::MalformedRecord, context.into())
    }

    pub fn data_source_unavailable(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::DataSourceUnavailable, context.into())
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::InvalidConfig,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_context() {
        let err = Error::invalid_query("query is blank");
        assert_eq!(err.to_string(), "InvalidQuery: query is blank");
    }

    #[test]
    fn io_errors_map_to_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.context.contains("denied"));
    }

    #[test]
    fn json_errors_map_to_invalid_config() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
