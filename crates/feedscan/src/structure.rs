//! Tag-nesting validation and hierarchy outlining

pub mod outline;
pub mod validator;

pub use outline::{outline, render_outline, OutlineEntry};
pub use validator::validate;
