//! Input resolution for commands that take a JSON payload: an explicit
//! `--input` file wins, piped stdin is the fallback.

pub mod file;
pub mod stdin;

pub use file::read_json;
pub use stdin::read_piped;
