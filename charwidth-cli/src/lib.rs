//! charwidth-cli: command-line front end for charwidth-engine
//!
//! Reads files or stdin, normalizes fullwidth/halfwidth characters, and
//! writes the result to stdout or back to the files.

pub mod cli;
pub mod settings;

pub use cli::{Cli, run};
pub use settings::Settings;
