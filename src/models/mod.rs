pub mod contract;
pub mod finding;
pub mod metadata;
pub mod report;

pub use contract::*;
pub use finding::*;
pub use metadata::*;
pub use report::*;
