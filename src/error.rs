//! Startup error types for pipeline-hello.
//! Used by: config, server, main.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_port_message_quotes_value() {
        assert_eq!(Error::InvalidPort("abc".into()).to_string(), r#"invalid PORT value: "abc""#);
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "io error: address in use");
    }
}
