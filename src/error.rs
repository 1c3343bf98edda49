//! Unified error types for the admin backend.
//! Used by: config, server, main.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid PORT value {0:?}: expected an integer in 1-65535")]
    InvalidPort(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_port_message_quotes_value() {
        assert_eq!(
            Error::InvalidPort("abc".into()).to_string(),
            "invalid PORT value \"abc\": expected an integer in 1-65535"
        );
    }

    #[test]
    fn bind_error_names_address_and_keeps_source() {
        let err = Error::Bind {
            addr: "0.0.0.0:5001".into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:5001: address in use");
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
