//! Attribute discovery over modules and package trees
//!
//! `Discovery` drives the whole engine: it enumerates target modules, loads
//! each one, scans its lines with the matcher, attaches docstrings and
//! trailing comments, resolves values through the module namespace and
//! applies the visibility and signature filters. Records come back in
//! traversal order, definitions in source order within each module.

use std::path::PathBuf;

use log::debug;

use crate::core::{Attribute, Error, Result, TypeSig, Value, Visibility};
use crate::loader::{LoadedModule, ModuleWalker};
use crate::parse::{docstring_above, match_attribute};

/// What discovery can run against: a filesystem path (module file or package
/// directory) or a module that is already loaded.
#[derive(Debug)]
pub enum Target {
    Path(PathBuf),
    Module(LoadedModule),
}

impl From<PathBuf> for Target {
    fn from(path: PathBuf) -> Self {
        Target::Path(path)
    }
}

impl From<&std::path::Path> for Target {
    fn from(path: &std::path::Path) -> Self {
        Target::Path(path.to_path_buf())
    }
}

impl From<&str> for Target {
    fn from(path: &str) -> Self {
        Target::Path(PathBuf::from(path))
    }
}

impl From<LoadedModule> for Target {
    fn from(module: LoadedModule) -> Self {
        Target::Module(module)
    }
}

/// Discover the public top-level attributes of a module or package tree
/// using the default configuration.
pub fn discover_attributes(target: impl Into<Target>) -> Result<Vec<Attribute>> {
    Discovery::new().discover(target)
}

/// Configurable attribute discovery
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    in_private_modules: bool,
    include_privates: bool,
    signature: Option<TypeSig>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan modules whose own name is private
    pub fn in_private_modules(mut self, include: bool) -> Self {
        self.in_private_modules = include;
        self
    }

    /// Return attributes whose own name is private
    pub fn include_privates(mut self, include: bool) -> Self {
        self.include_privates = include;
        self
    }

    /// Only return attributes whose resolved type matches
    pub fn with_signature(mut self, signature: TypeSig) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Run discovery. Fails with `Error::InvalidInput` when the target is
    /// neither a package directory nor a module; individual module load
    /// failures propagate as `Error::ModuleRead`.
    pub fn discover(&self, target: impl Into<Target>) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::new();
        match target.into() {
            Target::Module(module) => {
                self.scan_module(&module, &mut attributes);
            }
            Target::Path(path) => {
                if path.is_dir() {
                    let walker = ModuleWalker::new(path)
                        .in_private_modules(self.in_private_modules);
                    for module_path in walker.walk()? {
                        let module = LoadedModule::from_path(&module_path)?;
                        self.scan_module(&module, &mut attributes);
                    }
                } else if path.is_file() && crate::loader::is_module(&path) {
                    let module = LoadedModule::from_path(&path)?;
                    self.scan_module(&module, &mut attributes);
                } else {
                    return Err(Error::invalid_input(format!(
                        "{} is neither a package directory nor a module",
                        path.display()
                    )));
                }
            }
        }
        Ok(attributes)
    }

    fn scan_module(&self, module: &LoadedModule, out: &mut Vec<Attribute>) {
        if module.is_private() && !self.in_private_modules {
            debug!("skipping private module {}", module.name);
            return;
        }
        let lines: Vec<&str> = module.lines.iter().map(String::as_str).collect();
        for (idx, line) in lines.iter().enumerate() {
            let Some(matched) = match_attribute(line) else {
                continue;
            };
            let doc = docstring_above(&lines, idx);
            let (value, type_) = match module.resolve(&matched.name) {
                Some(resolved) => (resolved.clone(), TypeSig::of(resolved)),
                // Never an error: the record falls back to the textual
                // value and the annotated type.
                None => (
                    Value::Raw(matched.value.clone()),
                    matched.annotation.as_deref().map(TypeSig::parse),
                ),
            };
            let attribute = Attribute {
                visibility: Visibility::of_name(&matched.name),
                name: matched.name,
                type_,
                value,
                doc,
                comment: matched.comment,
                source: module.source.clone(),
                line: idx + 1,
            };
            if self.keeps(&attribute) {
                out.push(attribute);
            }
        }
    }

    /// Filters compose by conjunction
    fn keeps(&self, attribute: &Attribute) -> bool {
        if attribute.is_private() && !self.include_privates {
            return false;
        }
        match &self.signature {
            Some(signature) => attribute.type_.as_ref() == Some(signature),
            None => true,
        }
    }
}
