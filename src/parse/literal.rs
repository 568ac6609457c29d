//! Restricted literal evaluator
//!
//! Stands in for loading a module at runtime: resolves exactly the literal
//! forms the line matcher can surface (numbers, strings, booleans, None,
//! lists, tuples, dicts) plus references to names already bound in the same
//! module. Everything outside that grammar is unresolved and stays textual.

use crate::core::{Namespace, Value};

/// Evaluate a value expression against the namespace built so far.
///
/// Returns `None` when the expression is not a recognizable literal, leaving
/// the caller to fall back to the raw text.
pub fn eval_literal(expr: &str, namespace: &Namespace) -> Option<Value> {
    let mut parser = Parser {
        src: expr,
        pos: 0,
        namespace,
    };
    parser.skip_ws();
    let value = parser.value()?;
    parser.skip_ws();
    if parser.at_end() {
        Some(value)
    } else {
        None
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    namespace: &'a Namespace,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Option<Value> {
        match self.peek()? {
            '[' => self.sequence('[', ']').map(|(items, _)| Value::List(items)),
            '(' => self.sequence('(', ')').map(|(items, had_comma)| {
                // A single element without a trailing comma is just a
                // parenthesized expression, not a tuple.
                if items.len() == 1 && !had_comma {
                    items.into_iter().next().unwrap()
                } else {
                    Value::Tuple(items)
                }
            }),
            '{' => self.dict(),
            '"' | '\'' => self.string(),
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.number(),
            c if c.is_alphabetic() || c == '_' => self.name(),
            _ => None,
        }
    }

    fn sequence(&mut self, open: char, close: char) -> Option<(Vec<Value>, bool)> {
        if !self.eat(open) {
            return None;
        }
        let mut items = Vec::new();
        let mut had_comma = false;
        loop {
            self.skip_ws();
            if self.eat(close) {
                return Some((items, had_comma));
            }
            items.push(self.value()?);
            self.skip_ws();
            if self.eat(',') {
                had_comma = true;
            } else if self.eat(close) {
                return Some((items, had_comma));
            } else {
                return None;
            }
        }
    }

    fn dict(&mut self) -> Option<Value> {
        if !self.eat('{') {
            return None;
        }
        let mut entries = Vec::new();
        loop {
            self.skip_ws();
            if self.eat('}') {
                return Some(Value::Dict(entries));
            }
            let key = self.value()?;
            self.skip_ws();
            // No colon means a set literal, which stays unresolved.
            if !self.eat(':') {
                return None;
            }
            self.skip_ws();
            let value = self.value()?;
            entries.push((key, value));
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                return Some(Value::Dict(entries));
            }
            return None;
        }
    }

    fn string(&mut self) -> Option<Value> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '\\' => out.push('\\'),
                    '\'' => out.push('\''),
                    '"' => out.push('"'),
                    other => {
                        // Unknown escape: keep it verbatim, as the source does.
                        out.push('\\');
                        out.push(other);
                    }
                },
                c if c == quote => return Some(Value::Str(out)),
                c => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<Value> {
        let start = self.pos;
        if self.peek() == Some('-') || self.peek() == Some('+') {
            self.bump();
        }
        let mut seen_digit = false;
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    seen_digit = true;
                    self.bump();
                }
                '_' => {
                    self.bump();
                }
                '.' => {
                    is_float = true;
                    self.bump();
                }
                'e' | 'E' => {
                    is_float = true;
                    self.bump();
                    if self.peek() == Some('-') || self.peek() == Some('+') {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
        if !seen_digit {
            return None;
        }
        let token: String = self.src[start..self.pos]
            .chars()
            .filter(|c| *c != '_')
            .collect();
        if is_float {
            token.parse().ok().map(Value::Float)
        } else {
            token.parse().ok().map(Value::Int)
        }
    }

    fn name(&mut self) -> Option<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" => Some(Value::Bool(true)),
            "False" => Some(Value::Bool(false)),
            "None" => Some(Value::None),
            name => self.namespace.get(name).cloned(),
        }
    }
}
