//! Reader for the Python literal syntax used by hierarchy files.
//!
//! Hierarchy files are produced by a Python script that `repr`s a dict, so
//! they use single-quoted strings, `None`, and may carry tuples or trailing
//! commas. Python 2 tools write `u'...'` strings, so string prefixes and
//! adjacent-string concatenation are accepted too. Only literals are
//! accepted; there are no names or expressions.

use crate::errors::{BindgenError, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Containers nested deeper than this are rejected instead of recursing.
const MAX_DEPTH: usize = 256;

/// Prefixes allowed before a quote, compared case-insensitively.
const STRING_PREFIXES: &[&str] = &["u", "r", "b", "ur", "br", "rb"];

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Literal::None => "None",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::Str(_) => "str",
            Literal::List(_) => "list",
            Literal::Dict(_) => "dict",
        }
    }
}

/// Parse a complete document holding exactly one literal.
pub fn parse_literal(input: &str) -> Result<Literal> {
    let mut parser = Parser::new(input);
    let value = parser.value()?;
    parser.skip_trivia();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(parser.error(format!("unexpected '{}' after literal", c))),
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> BindgenError {
        BindgenError::syntax(message, self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_trivia();
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    fn value(&mut self) -> Result<Literal> {
        self.skip_trivia();
        match self.peek() {
            Some('{') => self.dict(),
            Some('[') => self.sequence('[', ']'),
            Some('(') => self.sequence('(', ')'),
            Some(_) if self.string_prefix().is_some() => self.strings(),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.keyword(),
            Some(c) => Err(self.error(format!("unexpected '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Run `f` one container level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn dict(&mut self) -> Result<Literal> {
        self.expect('{')?;
        self.nested(|p| {
            let mut items = Vec::new();
            loop {
                p.skip_trivia();
                if p.peek() == Some('}') {
                    p.bump();
                    return Ok(Literal::Dict(items));
                }
                let key = p.value()?;
                p.expect(':')?;
                let value = p.value()?;
                items.push((key, value));
                if !p.separator('}')? {
                    return Ok(Literal::Dict(items));
                }
            }
        })
    }

    fn sequence(&mut self, open: char, close: char) -> Result<Literal> {
        self.expect(open)?;
        self.nested(|p| {
            let mut items = Vec::new();
            loop {
                p.skip_trivia();
                if p.peek() == Some(close) {
                    p.bump();
                    return Ok(Literal::List(items));
                }
                items.push(p.value()?);
                if !p.separator(close)? {
                    return Ok(Literal::List(items));
                }
            }
        })
    }

    /// Consume `,` (returns true: more items may follow) or the closing
    /// delimiter (returns false).
    fn separator(&mut self, close: char) -> Result<bool> {
        self.skip_trivia();
        match self.peek() {
            Some(',') => {
                self.bump();
                Ok(true)
            }
            Some(c) if c == close => {
                self.bump();
                Ok(false)
            }
            Some(c) => Err(self.error(format!("expected ',' or '{}', found '{}'", close, c))),
            None => Err(self.error(format!("expected '{}', found end of input", close))),
        }
    }

    /// If a string starts here, its prefix (possibly empty).
    fn string_prefix(&self) -> Option<String> {
        let mut prefix = String::new();
        for c in self.chars.clone() {
            if c == '\'' || c == '"' {
                let known = prefix.is_empty()
                    || STRING_PREFIXES.contains(&prefix.to_ascii_lowercase().as_str());
                return known.then_some(prefix);
            }
            if !c.is_ascii_alphabetic() || prefix.len() == 2 {
                return None;
            }
            prefix.push(c);
        }
        None
    }

    /// One or more adjacent string literals, joined.
    fn strings(&mut self) -> Result<Literal> {
        let mut out = String::new();
        while let Some(prefix) = self.string_prefix() {
            for _ in 0..prefix.len() {
                self.bump();
            }
            let raw = prefix.contains(['r', 'R']);
            match self.peek() {
                Some(quote) => out.push_str(&self.string(quote, raw)?),
                None => return Err(self.error("unterminated string")),
            }
            self.skip_trivia();
        }
        Ok(Literal::Str(out))
    }

    fn string(&mut self, quote: char, raw: bool) -> Result<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') if raw => {
                    out.push('\\');
                    let next = self
                        .bump()
                        .ok_or_else(|| self.error("unterminated string"))?;
                    out.push(next);
                }
                Some('\\') => {
                    let escaped = self
                        .bump()
                        .ok_or_else(|| self.error("unterminated string"))?;
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        '0' => out.push('\0'),
                        '\\' | '\'' | '"' => out.push(escaped),
                        '\n' => {}
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Result<Literal> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.' | '_') {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        let cleaned = text.replace('_', "");
        if let Ok(i) = cleaned.parse::<i64>() {
            return Ok(Literal::Int(i));
        }
        cleaned
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| self.error(format!("invalid number '{}'", text)))
    }

    fn keyword(&mut self) -> Result<Literal> {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match word.as_str() {
            "None" => Ok(Literal::None),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            _ => Err(self.error(format!("'{}' is not a literal", word))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_nested_dict() {
        let lit = parse_literal("{'A': {'subclass': None, 'protocols': []}}").unwrap();
        assert_eq!(
            lit,
            Literal::Dict(vec![(
                Literal::Str("A".into()),
                Literal::Dict(vec![
                    (Literal::Str("subclass".into()), Literal::None),
                    (Literal::Str("protocols".into()), Literal::List(vec![])),
                ])
            )])
        );
    }

    #[test]
    fn test_trailing_commas_tuples_and_comments() {
        let input = indoc! {r#"
            # generated
            {
                "B": ('x', "y",),  # tuple
                'n': [1, -2, 3.5, True, False,],
            }
        "#};
        let lit = parse_literal(input).unwrap();
        let Literal::Dict(items) = lit else {
            panic!("expected dict");
        };
        assert_eq!(
            items[0].1,
            Literal::List(vec![Literal::Str("x".into()), Literal::Str("y".into())])
        );
        assert_eq!(
            items[1].1,
            Literal::List(vec![
                Literal::Int(1),
                Literal::Int(-2),
                Literal::Float(3.5),
                Literal::Bool(true),
                Literal::Bool(false),
            ])
        );
    }

    #[test]
    fn test_string_escapes() {
        let lit = parse_literal(r#"'it\'s\n"quoted"'"#).unwrap();
        assert_eq!(lit, Literal::Str("it's\n\"quoted\"".into()));
    }

    #[test]
    fn test_python2_string_prefixes() {
        let lit = parse_literal("{u'CCNode': {'subclass': u'NSObject', 'protocols': [U\"x\", b'y']}}")
            .unwrap();
        let Literal::Dict(items) = lit else {
            panic!("expected dict");
        };
        assert_eq!(items[0].0, Literal::Str("CCNode".into()));
        assert_eq!(
            items[0].1,
            Literal::Dict(vec![
                (Literal::Str("subclass".into()), Literal::Str("NSObject".into())),
                (
                    Literal::Str("protocols".into()),
                    Literal::List(vec![Literal::Str("x".into()), Literal::Str("y".into())])
                ),
            ])
        );
    }

    #[test]
    fn test_raw_strings_keep_backslashes() {
        assert_eq!(
            parse_literal(r"r'a\nb'").unwrap(),
            Literal::Str(r"a\nb".into())
        );
        assert_eq!(
            parse_literal(r"ur'it\'s'").unwrap(),
            Literal::Str(r"it\'s".into())
        );
    }

    #[test]
    fn test_adjacent_strings_concatenate() {
        assert_eq!(parse_literal("'CC' 'Node'").unwrap(), Literal::Str("CCNode".into()));
        assert_eq!(
            parse_literal("['CC'\n  u\"Sprite\"  # split\n  'Batch', 'x']").unwrap(),
            Literal::List(vec![
                Literal::Str("CCSpriteBatch".into()),
                Literal::Str("x".into()),
            ])
        );
    }

    #[test]
    fn test_unknown_prefix_is_not_a_string() {
        assert!(parse_literal("x'CCNode'").is_err());
        assert!(parse_literal("{'A': u}").is_err());
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let err = parse_literal(&"[".repeat(100_000)).unwrap_err();
        assert!(err.to_string().contains("nesting too deep"), "{err}");

        let nested = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert!(parse_literal(&nested).is_ok());
    }

    #[test]
    fn test_error_reports_line_and_column() {
        let err = parse_literal("{\n  'A': ]\n}").unwrap_err();
        match err {
            BindgenError::Parse { line, column, .. } => {
                assert_eq!(line, Some(2));
                assert_eq!(column, Some(8));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_names_and_trailing_input() {
        assert!(parse_literal("{'A': NSObject}").is_err());
        assert!(parse_literal("{} {}").is_err());
        assert!(parse_literal("'unterminated").is_err());
        assert!(parse_literal("").is_err());
    }
}
