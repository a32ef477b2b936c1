pub mod checks;

// Re-export use cases
pub use checks::{
    build_checker, AnswerMatchChecker, Checker, SignatureFreshnessChecker,
    ZoneConsistencyChecker,
};
