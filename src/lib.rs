// Export modules for library usage
pub mod cli;
pub mod core;
pub mod discover;
pub mod io;
pub mod loader;
pub mod parse;

// Re-export commonly used types
pub use crate::core::{Attribute, Error, Namespace, Result, TypeSig, Value, Visibility};

pub use crate::discover::{discover_attributes, Discovery, Target};

pub use crate::loader::{is_private_name, LoadedModule, ModuleWalker};

pub use crate::parse::{docstring_above, eval_literal, find_docstring, match_attribute};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
