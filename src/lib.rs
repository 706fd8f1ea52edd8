//! # path-abbrev
//!
//! `path-abbrev` shortens file-system paths to fit a display width. It powers
//! the `abbrev` CLI tool.
//!
//! Paths are treated as opaque text. A path longer than the limit keeps its
//! last `max_len` characters behind a single `…`. Nothing is normalized and
//! the filesystem is never touched.
//!
//! ## Example
//!
//! ```rust
//! use path_abbrev::abbreviate;
//!
//! let short = abbreviate("/home/user/projects/repos/src/main.rs", 12);
//! assert_eq!(short, "…/src/main.rs");
//! ```

pub mod commands;
pub mod core;
pub mod utils;

pub use crate::core::config::{DEFAULT_MAX_LEN, ELLIPSIS};
pub use utils::{abbreviate, abbreviate_signed};
