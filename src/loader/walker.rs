//! Package tree traversal

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::debug;

use crate::core::Result;
use crate::loader::module::is_private_name;

const MODULE_EXTENSIONS: [&str; 2] = ["py", "pyw"];

/// Walks a package directory and yields its module files in a stable,
/// lexicographic, depth-recursive order.
pub struct ModuleWalker {
    root: PathBuf,
    in_private_modules: bool,
}

impl ModuleWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            in_private_modules: false,
        }
    }

    /// Include modules (and sub-packages) whose own name is private
    pub fn in_private_modules(mut self, include: bool) -> Self {
        self.in_private_modules = include;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut modules = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !is_module(path) {
                continue;
            }
            if !self.in_private_modules && self.has_private_component(path) {
                debug!("skipping private module {}", path.display());
                continue;
            }
            modules.push(path.to_path_buf());
        }

        Ok(modules)
    }

    /// True when the module itself, or any package directory between it and
    /// the walk root, is private. The root is exempt: targeting a private
    /// package explicitly is the caller's decision.
    fn has_private_component(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .iter()
            .any(|component| is_private_name(&component.to_string_lossy()))
    }
}

/// Whether a path names a module file
pub fn is_module(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| MODULE_EXTENSIONS.iter().any(|m| ext == *m))
}
