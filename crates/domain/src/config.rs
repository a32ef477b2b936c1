pub mod checks;
pub mod errors;
pub mod logging;
pub mod root;

pub use checks::{
    AnswerMatchConfig, CheckConfig, SignatureFreshnessConfig, ZoneConsistencyConfig,
    DEFAULT_MIN_DAYS,
};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
