//! Tag-boundary scanning over raw document text

pub mod cursor;
pub mod token;

pub use cursor::Cursor;
pub use token::TagToken;
