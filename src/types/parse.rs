//! Textual type expressions: `int`, `string[]`, `Map<int, List<bool>>`, `#0`,
//! and open generic patterns such as `TestData<,>`.

use super::{Primitive, TypePattern, TypeRef};
use crate::error::SuiteError;

pub fn parse_type(expr: &str) -> Result<TypeRef, SuiteError> {
    parse_type_with_params(expr, &[])
}

/// Parses `expr`, mapping any identifier found in `params` to its position.
pub fn parse_type_with_params(expr: &str, params: &[String]) -> Result<TypeRef, SuiteError> {
    let mut parser = TypeParser::new(expr, params);
    let ty = parser.parse_type()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(ty)
}

pub fn parse_pattern(expr: &str, params: &[String]) -> Result<TypePattern, SuiteError> {
    let trimmed = expr.trim();
    if let Some(open) = trimmed.find('<') {
        let inner = &trimmed[open + 1..];
        if let Some(body) = inner.strip_suffix('>') {
            if body.chars().all(|c| c == ',' || c.is_whitespace()) {
                let name = trimmed[..open].trim();
                if !is_identifier(name) {
                    return Err(SuiteError::invalid_type_expression(
                        expr,
                        "expected a type name before '<'",
                    ));
                }
                return Ok(TypePattern::Generic {
                    name: name.to_string(),
                    arity: body.matches(',').count() + 1,
                });
            }
        }
    }
    parse_type_with_params(trimmed, params).map(TypePattern::Exact)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_ident_char)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

struct TypeParser<'a> {
    expr: &'a str,
    chars: Vec<char>,
    pos: usize,
    params: &'a [String],
}

impl<'a> TypeParser<'a> {
    fn new(expr: &'a str, params: &'a [String]) -> Self {
        Self {
            expr,
            chars: expr.chars().collect(),
            pos: 0,
            params,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SuiteError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{expected}'")))
        }
    }

    fn error(&self, message: &str) -> SuiteError {
        SuiteError::invalid_type_expression(self.expr, format!("{message} at offset {}", self.pos))
    }

    fn parse_type(&mut self) -> Result<TypeRef, SuiteError> {
        let mut ty = self.parse_atom()?;
        loop {
            self.skip_whitespace();
            if self.peek() != Some('[') {
                return Ok(ty);
            }
            self.pos += 1;
            self.expect(']')?;
            ty = TypeRef::array(ty);
        }
    }

    fn parse_atom(&mut self) -> Result<TypeRef, SuiteError> {
        self.skip_whitespace();
        if self.peek() == Some('#') {
            self.pos += 1;
            let digits = self.take_while(|c| c.is_ascii_digit());
            return digits
                .parse::<usize>()
                .map(TypeRef::Param)
                .map_err(|_| self.error("expected a parameter index after '#'"));
        }

        let name = self.take_while(is_ident_char);
        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }

        self.skip_whitespace();
        if self.peek() == Some('<') {
            self.pos += 1;
            let mut args = vec![self.parse_type()?];
            loop {
                self.skip_whitespace();
                match self.peek() {
                    Some(',') => {
                        self.pos += 1;
                        args.push(self.parse_type()?);
                    }
                    Some('>') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err(self.error("expected ',' or '>'")),
                }
            }
            return Ok(TypeRef::generic(name, args));
        }

        if let Some(index) = self.params.iter().position(|param| *param == name) {
            return Ok(TypeRef::Param(index));
        }
        if name == "object" {
            return Ok(TypeRef::Object);
        }
        Ok(Primitive::from_name(&name)
            .map(TypeRef::Primitive)
            .unwrap_or_else(|| TypeRef::named(name)))
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&predicate) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}
