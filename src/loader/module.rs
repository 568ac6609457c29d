//! Module loading: source lines plus the evaluated namespace
//!
//! Loading a module means reading its source once and replaying its simple
//! assignments through the literal evaluator, so that name lookups afterwards
//! see the final binding of each attribute, the same way a runtime import
//! would.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::{Error, Namespace, Result, Value};
use crate::parse::{eval_literal, match_attribute};

/// A loaded source module: its lines and its evaluated namespace
#[derive(Debug, Clone)]
pub struct LoadedModule {
    pub name: String,
    pub source: Option<PathBuf>,
    pub lines: Vec<String>,
    pub namespace: Namespace,
}

impl LoadedModule {
    /// Load a module from a file. Read failures propagate; the caller owns
    /// the skip-vs-abort decision.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|source| Error::module_read(path, source))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("loading module {} from {}", name, path.display());
        Ok(Self::build(name, Some(path.to_path_buf()), &text))
    }

    /// Build an in-memory module from source text, the pre-loaded arm of the
    /// loader contract.
    pub fn from_source(name: impl Into<String>, text: &str) -> Self {
        Self::build(name.into(), None, text)
    }

    fn build(name: String, source: Option<PathBuf>, text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let mut namespace = Namespace::new();
        for line in &lines {
            let Some(matched) = match_attribute(line) else {
                continue;
            };
            match eval_literal(&matched.value, &namespace) {
                Some(value) => {
                    namespace.insert(matched.name, value);
                }
                // A rebinding we cannot evaluate invalidates whatever the
                // name held before; the runtime value is simply unknown.
                None => {
                    namespace.remove(&matched.name);
                }
            }
        }
        Self {
            name,
            source,
            lines,
            namespace,
        }
    }

    /// Look up the final bound value of a name
    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.namespace.get(name)
    }

    pub fn is_private(&self) -> bool {
        is_private_name(&self.name)
    }
}

/// Leading-underscore naming convention for modules and attributes
pub fn is_private_name(name: &str) -> bool {
    name.starts_with('_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn namespace_holds_evaluated_bindings() {
        let module = LoadedModule::from_source(
            "settings",
            indoc! {"
                TIMEOUT = 30
                NAME = 'svc'
                RATIO: float = 0.5
            "},
        );
        assert_eq!(module.resolve("TIMEOUT"), Some(&Value::Int(30)));
        assert_eq!(module.resolve("NAME"), Some(&Value::Str("svc".into())));
        assert_eq!(module.resolve("RATIO"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn aliases_resolve_in_definition_order() {
        let module = LoadedModule::from_source(
            "alias",
            indoc! {"
                BASE = 10
                COPY = BASE
                EARLY = LATE
                LATE = 1
            "},
        );
        assert_eq!(module.resolve("COPY"), Some(&Value::Int(10)));
        // Forward references never resolve, just as at import time.
        assert_eq!(module.resolve("EARLY"), None);
        assert_eq!(module.resolve("LATE"), Some(&Value::Int(1)));
    }

    #[test]
    fn later_assignment_wins() {
        let module = LoadedModule::from_source("redef", "X = 1\nX = 2\n");
        assert_eq!(module.resolve("X"), Some(&Value::Int(2)));
    }

    #[test]
    fn unresolvable_rebinding_clears_the_name() {
        let module = LoadedModule::from_source("redef", "X = 1\nX = compute()\n");
        assert_eq!(module.resolve("X"), None);
    }

    #[test]
    fn private_name_convention() {
        assert!(is_private_name("_internal"));
        assert!(is_private_name("__init__"));
        assert!(!is_private_name("public"));
        assert!(LoadedModule::from_source("_hidden", "").is_private());
    }

    #[test]
    fn missing_file_propagates_module_read() {
        let err = LoadedModule::from_path(Path::new("/no/such/module.py")).unwrap_err();
        assert!(matches!(err, Error::ModuleRead { .. }));
    }
}
