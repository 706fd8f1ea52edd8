pub(crate) mod path;

// Public API - utilities used by commands
pub use path::{abbreviate, abbreviate_signed};
