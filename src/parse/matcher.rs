//! Line-level matcher for attribute-definition statements
//!
//! Recognizes the single-line shape `NAME [: TYPE] = VALUE [# COMMENT]` and
//! nothing else. Multi-line expressions, destructuring, augmented assignment
//! and comparisons are all deliberate non-matches: a false negative is cheap,
//! a false positive would put garbage in generated docs.

use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?::\s*([A-Za-z_][A-Za-z0-9_\[\]\., ]*?)\s*)?=\s*([^#]*?)\s*(?:#\s*(.*?)\s*)?$",
    )
    .unwrap()
});

/// The parts of a matched attribute-definition line, all edge-trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatch {
    pub name: String,
    pub annotation: Option<String>,
    pub value: String,
    pub comment: Option<String>,
}

/// Match one source line against the attribute-definition shape.
///
/// Returns `None` for anything that is not a simple assignment: names with
/// spaces, a type token without its introducing colon, or a lone `==`
/// comparison.
pub fn match_attribute(line: &str) -> Option<AttributeMatch> {
    let captures = ATTRIBUTE.captures(line)?;
    let value = captures.get(3).map_or("", |m| m.as_str());
    // The regex crate has no lookahead, so `a == 2` reaches here with the
    // second `=` captured as the value head. Reject it structurally.
    if value.is_empty() || value.starts_with('=') {
        return None;
    }
    Some(AttributeMatch {
        name: captures[1].to_string(),
        annotation: captures.get(2).map(|m| m.as_str().trim().to_string()),
        value: value.to_string(),
        comment: captures
            .get(4)
            .map(|m| m.as_str().to_string())
            .filter(|c| !c.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(line: &str) -> (String, Option<String>, String, Option<String>) {
        let m = match_attribute(line).expect("line should match");
        (m.name, m.annotation, m.value, m.comment)
    }

    #[test]
    fn matches_bare_assignment_with_whitespace() {
        assert_eq!(
            parts("  some_attr   =     2  "),
            ("some_attr".into(), None, "2".into(), None)
        );
    }

    #[test]
    fn matches_annotated_assignment() {
        assert_eq!(
            parts("  some_attr  :  int  =   2  "),
            ("some_attr".into(), Some("int".into()), "2".into(), None)
        );
    }

    #[test]
    fn matches_annotation_and_trailing_comment() {
        assert_eq!(
            parts("  some_attr  :  int  =   2  #   bla bla bla!   "),
            (
                "some_attr".into(),
                Some("int".into()),
                "2".into(),
                Some("bla bla bla!".into())
            )
        );
    }

    #[test]
    fn matches_subscripted_annotation() {
        assert_eq!(
            parts("names: Dict[str, int] = {}"),
            (
                "names".into(),
                Some("Dict[str, int]".into()),
                "{}".into(),
                None
            )
        );
    }

    #[test]
    fn preserves_internal_value_whitespace() {
        assert_eq!(
            parts("greeting = 'hello   world'"),
            ("greeting".into(), None, "'hello   world'".into(), None)
        );
    }

    #[test]
    fn rejects_type_token_without_colon() {
        assert_eq!(match_attribute("  some_attr    int  =   2  # bla"), None);
    }

    #[test]
    fn rejects_name_containing_spaces() {
        assert_eq!(match_attribute("  some attr     =   2  # bla"), None);
    }

    #[test]
    fn rejects_equality_comparison() {
        assert_eq!(match_attribute("some attr == 2"), None);
        assert_eq!(match_attribute("some_attr == 2"), None);
    }

    #[test]
    fn equality_inside_value_is_fine() {
        assert_eq!(
            parts("check = a == b"),
            ("check".into(), None, "a == b".into(), None)
        );
    }

    #[test]
    fn rejects_assignment_without_value() {
        assert_eq!(match_attribute("some_attr = "), None);
    }

    #[test]
    fn rejects_plain_code_lines() {
        assert_eq!(match_attribute("def foo():"), None);
        assert_eq!(match_attribute("import os"), None);
        assert_eq!(match_attribute("3 = x"), None);
        assert_eq!(match_attribute(""), None);
    }

    #[test]
    fn empty_trailing_comment_is_absent() {
        assert_eq!(parts("x = 2 #"), ("x".into(), None, "2".into(), None));
    }

    #[test]
    fn private_names_still_match() {
        assert_eq!(
            parts("_hidden = 'x'"),
            ("_hidden".into(), None, "'x'".into(), None)
        );
    }
}
