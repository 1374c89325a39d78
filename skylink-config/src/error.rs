use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Decoder-level failure; the message points at the offending field.
    #[error("malformed configuration: {0}")]
    Malformed(String),
}
