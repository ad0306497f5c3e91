pub mod html;
pub mod json;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures;

pub use html::render_html;
pub use json::{deserialize_report, serialize_report, validate_report};
pub use summary::aggregate;
