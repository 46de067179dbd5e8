//! Recursive-descent parser for type text.
//!
//! ```text
//! type    := primary ('|' primary)*
//! primary := NAME ('[' args ']')? | QUOTED_NAME | literal
//! args    := arg (',' arg)* ','?
//! arg     := type | '...'
//! literal := '-'? number | STRING | BYTES | True | False | None
//! number  := INT | FLOAT | inf | nan
//! ```
//!
//! Builtin names resolve first, then the [`TypeEnv`]. Container arguments
//! are kept as written: `list[int, str]` parses fine and is left for
//! decomposition to reject. Special forms (`Optional`, `NotRequired`,
//! `Union`, `Literal`) need their arguments to build anything, so their
//! argument counts are checked here.

use conform_ir::{Container, TypeExpr, Value};
use conform_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::lexer::{lex, TokenKind};
use crate::{ParseError, Span, TypeEnv};

/// Parse `source` into a type expression, resolving names through `env`.
#[tracing::instrument(level = "debug", skip(env), err)]
pub fn parse_type(source: &str, env: &TypeEnv) -> Result<TypeExpr, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        cursor: Cursor::new(&tokens),
        env,
    };
    let expr = parser.parse_union()?;
    if !parser.cursor.is_at_end() {
        let token = parser.cursor.current();
        return Err(ParseError::TrailingInput {
            found: token.kind.display_name(),
            span: token.span,
        });
    }
    tracing::debug!(tokens = tokens.len(), "parsed type");
    Ok(expr)
}

/// Special forms that build a type from their arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Form {
    Container(Container),
    Union,
    Optional,
    NotRequired,
    Literal,
}

impl Form {
    fn from_name(name: &str) -> Option<Form> {
        Some(match name {
            "list" | "List" => Form::Container(Container::List),
            "set" | "Set" => Form::Container(Container::Set),
            "dict" | "Dict" => Form::Container(Container::Dict),
            "tuple" | "Tuple" => Form::Container(Container::Tuple),
            "Union" => Form::Union,
            "Optional" => Form::Optional,
            "NotRequired" => Form::NotRequired,
            "Literal" => Form::Literal,
            _ => return None,
        })
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    env: &'a TypeEnv,
}

impl Parser<'_> {
    fn parse_union(&mut self) -> Result<TypeExpr, ParseError> {
        let first = self.parse_primary()?;
        if !self.cursor.check(&TokenKind::Pipe) {
            return Ok(first);
        }
        let mut members = vec![first];
        while self.cursor.eat(&TokenKind::Pipe) {
            members.push(self.parse_primary()?);
        }
        Ok(TypeExpr::union(members))
    }

    fn parse_primary(&mut self) -> Result<TypeExpr, ParseError> {
        ensure_sufficient_stack(|| {
            let token = self.cursor.current();
            match &token.kind {
                TokenKind::Ident(name) => {
                    self.cursor.advance();
                    if self.cursor.check(&TokenKind::LBracket) {
                        self.parse_subscript(name, token.span)
                    } else {
                        self.resolve_bare(name, token.span)
                    }
                }
                TokenKind::Str(name) => {
                    self.cursor.advance();
                    Ok(self
                        .lookup(name)
                        .unwrap_or_else(|| TypeExpr::forward(name.as_str())))
                }
                TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::Minus | TokenKind::Bytes(_) => {
                    Ok(TypeExpr::Value(self.parse_literal_value()?))
                }
                _ => Err(self.cursor.unexpected("a type")),
            }
        })
    }

    /// A name with no subscript.
    fn resolve_bare(&self, name: &str, span: Span) -> Result<TypeExpr, ParseError> {
        if let Some(value) = named_value(name) {
            return Ok(TypeExpr::Value(value));
        }
        if let Some(expr) = self.lookup(name) {
            return Ok(expr);
        }
        match Form::from_name(name) {
            Some(form) => Err(ParseError::WrongArgumentCount {
                name: name.to_string(),
                expected: form_arity(form),
                span,
            }),
            None => Err(ParseError::UnknownName {
                name: name.to_string(),
                span,
            }),
        }
    }

    /// A type that a name denotes on its own: plain builtins, bare
    /// containers, and environment entries.
    fn lookup(&self, name: &str) -> Option<TypeExpr> {
        let builtin = match name {
            "Any" => TypeExpr::Any,
            "object" => TypeExpr::object(),
            "int" => TypeExpr::int(),
            "float" => TypeExpr::float(),
            "bool" => TypeExpr::bool(),
            "str" => TypeExpr::str(),
            "bytes" => TypeExpr::bytes(),
            "None" | "NoneType" => TypeExpr::none(),
            _ => match Form::from_name(name) {
                Some(Form::Container(container)) => TypeExpr::bare(container),
                _ => return self.env.get(name).cloned(),
            },
        };
        Some(builtin)
    }

    /// `name[...]`, with the cursor on `[`.
    fn parse_subscript(&mut self, name: &str, name_span: Span) -> Result<TypeExpr, ParseError> {
        let Some(form) = Form::from_name(name) else {
            return Err(if self.lookup(name).is_some() || named_value(name).is_some() {
                ParseError::NotGeneric {
                    name: name.to_string(),
                    span: name_span,
                }
            } else {
                ParseError::UnknownName {
                    name: name.to_string(),
                    span: name_span,
                }
            });
        };

        self.cursor.expect(&TokenKind::LBracket, "`[`")?;
        match form {
            Form::Literal => Ok(TypeExpr::Literal(self.parse_list(Self::parse_literal_value)?)),
            Form::Container(container) => Ok(TypeExpr::generic(
                container,
                self.parse_list(Self::parse_arg)?,
            )),
            Form::Union => Ok(TypeExpr::union(self.parse_list(Self::parse_arg)?)),
            Form::Optional | Form::NotRequired => {
                let args = self.parse_list(Self::parse_arg)?;
                let Ok([inner]) = <[TypeExpr; 1]>::try_from(args) else {
                    return Err(ParseError::WrongArgumentCount {
                        name: name.to_string(),
                        expected: form_arity(form),
                        span: name_span.merge(self.cursor.previous_span()),
                    });
                };
                Ok(if form == Form::Optional {
                    TypeExpr::optional(inner)
                } else {
                    TypeExpr::optional_field(inner)
                })
            }
        }
    }

    /// One or more comma-separated items up to `]`, allowing a trailing comma.
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![item(self)?];
        while self.cursor.eat(&TokenKind::Comma) {
            if self.cursor.check(&TokenKind::RBracket) {
                break;
            }
            items.push(item(self)?);
        }
        self.cursor.expect(&TokenKind::RBracket, "`,` or `]`")?;
        Ok(items)
    }

    fn parse_arg(&mut self) -> Result<TypeExpr, ParseError> {
        if self.cursor.eat(&TokenKind::Ellipsis) {
            Ok(TypeExpr::Ellipsis)
        } else {
            self.parse_union()
        }
    }

    fn parse_literal_value(&mut self) -> Result<Value, ParseError> {
        let token = self.cursor.current();
        let value = match &token.kind {
            TokenKind::Int(n) => Value::Int(*n),
            TokenKind::Float(x) => Value::Float(*x),
            TokenKind::Str(s) => Value::string(s.as_str()),
            TokenKind::Bytes(b) => Value::bytes(b.clone()),
            TokenKind::Ident(name) if name == "None" => Value::None,
            TokenKind::Ident(name) => match named_value(name) {
                Some(value) => value,
                None => return Err(self.bad_literal()),
            },
            TokenKind::Minus => {
                self.cursor.advance();
                let value = match self.cursor.current_kind() {
                    TokenKind::Int(n) => Value::Int(-n),
                    TokenKind::Float(x) => Value::Float(-x),
                    TokenKind::Ident(name) if name == "inf" => Value::Float(f64::NEG_INFINITY),
                    TokenKind::Ident(name) if name == "nan" => Value::Float(f64::NAN),
                    _ => return Err(self.cursor.unexpected("a number")),
                };
                self.cursor.advance();
                return Ok(value);
            }
            TokenKind::Ellipsis => return Err(self.bad_literal()),
            _ => return Err(self.cursor.unexpected("a literal value")),
        };
        self.cursor.advance();
        Ok(value)
    }

    fn bad_literal(&self) -> ParseError {
        let token = self.cursor.current();
        ParseError::BadLiteral {
            found: token.kind.display_name(),
            span: token.span,
        }
    }
}

/// Names that stand for a value rather than a type.
fn named_value(name: &str) -> Option<Value> {
    Some(match name {
        "True" => Value::Bool(true),
        "False" => Value::Bool(false),
        "inf" => Value::Float(f64::INFINITY),
        "nan" => Value::Float(f64::NAN),
        _ => return None,
    })
}

fn form_arity(form: Form) -> &'static str {
    match form {
        Form::Optional | Form::NotRequired => "exactly one type argument",
        Form::Literal => "at least one literal value",
        Form::Union | Form::Container(_) => "at least one type argument",
    }
}

#[cfg(test)]
mod tests;
