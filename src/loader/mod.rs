//! Module and package loading

pub mod module;
pub mod walker;

pub use module::{is_private_name, LoadedModule};
pub use walker::{is_module, ModuleWalker};
