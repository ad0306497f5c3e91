pub mod types;

pub use types::SolauditError;
