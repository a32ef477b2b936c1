mod checks;

pub use checks::Checks;
