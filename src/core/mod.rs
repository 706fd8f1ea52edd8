// Configuration constants - public so the CLI and library callers share defaults
pub mod config;

pub use config::{clamp_max_len, resolve_max_len, DEFAULT_MAX_LEN, MAX_LEN_ENV_VAR};
