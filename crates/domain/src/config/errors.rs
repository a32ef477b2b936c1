#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid check #{index} ({kind}): {reason}")]
    InvalidCheck {
        index: usize,
        kind: &'static str,
        reason: String,
    },
}
