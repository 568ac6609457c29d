//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Evaluated namespace of a module: name to final bound value
pub type Namespace = HashMap<String, Value>;

/// Value forms the restricted evaluator can resolve.
///
/// `Raw` carries the trimmed right-hand-side text of a definition whose
/// expression falls outside the evaluable grammar (calls, arithmetic,
/// imported names). Everything else is an authoritative resolved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Raw(String),
}

impl Value {
    /// Whether this value was resolved by the evaluator
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Value::Raw(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::None => write!(f, "None"),
            Value::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Raw(text) => write!(f, "{text}"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Type signature of a resolved attribute, also usable as a discovery filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSig {
    Int,
    Float,
    Str,
    Bool,
    NoneType,
    List,
    Tuple,
    Dict,
    /// An annotation that names no built-in type
    Named(String),
}

impl TypeSig {
    /// Signature of a resolved value; `Raw` values have none
    pub fn of(value: &Value) -> Option<TypeSig> {
        match value {
            Value::Int(_) => Some(TypeSig::Int),
            Value::Float(_) => Some(TypeSig::Float),
            Value::Str(_) => Some(TypeSig::Str),
            Value::Bool(_) => Some(TypeSig::Bool),
            Value::None => Some(TypeSig::NoneType),
            Value::List(_) => Some(TypeSig::List),
            Value::Tuple(_) => Some(TypeSig::Tuple),
            Value::Dict(_) => Some(TypeSig::Dict),
            Value::Raw(_) => None,
        }
    }

    /// Best-effort parse of an annotation text. Subscripted annotations map
    /// to their base container type; anything unrecognized becomes `Named`.
    pub fn parse(text: &str) -> TypeSig {
        let text = text.trim();
        let base = text.split('[').next().unwrap_or(text).trim();
        match base {
            "int" => TypeSig::Int,
            "float" => TypeSig::Float,
            "str" => TypeSig::Str,
            "bool" => TypeSig::Bool,
            "None" | "NoneType" => TypeSig::NoneType,
            "list" | "List" => TypeSig::List,
            "tuple" | "Tuple" => TypeSig::Tuple,
            "dict" | "Dict" => TypeSig::Dict,
            _ => TypeSig::Named(text.to_string()),
        }
    }
}

impl fmt::Display for TypeSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeSig::Int => "int",
            TypeSig::Float => "float",
            TypeSig::Str => "str",
            TypeSig::Bool => "bool",
            TypeSig::NoneType => "NoneType",
            TypeSig::List => "list",
            TypeSig::Tuple => "tuple",
            TypeSig::Dict => "dict",
            TypeSig::Named(name) => name,
        };
        write!(f, "{name}")
    }
}

/// Visibility derived from the leading-underscore naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn of_name(name: &str) -> Visibility {
        if name.starts_with('_') {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// A discovered top-level attribute definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Declared name, unique within its defining module scope
    pub name: String,
    /// Type of the resolved value, or the annotated type when unresolved
    #[serde(rename = "type")]
    pub type_: Option<TypeSig>,
    /// Resolved value, or `Value::Raw` with the literal expression text
    pub value: Value,
    /// Block-comment description found immediately above the definition
    pub doc: Option<String>,
    /// Trailing same-line comment
    pub comment: Option<String>,
    pub visibility: Visibility,
    /// Module file the definition came from; in-memory modules have none
    pub source: Option<PathBuf>,
    /// 1-based line number of the definition
    pub line: usize,
}

impl Attribute {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}
