//! Static text analysis: line matching, docstring recovery, literal values

pub mod docblock;
pub mod literal;
pub mod matcher;

pub use docblock::{docstring_above, find_docstring};
pub use literal::eval_literal;
pub use matcher::{match_attribute, AttributeMatch};
