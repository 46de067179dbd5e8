//! Lexer for type text using logos.
//!
//! Quoted literals are unescaped here, so the parser only ever sees decoded
//! strings and byte strings. The token list always ends with [`TokenKind::Eof`].

use logos::Logos;

use crate::{ParseError, Span};

/// Raw token from logos (before unescaping).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("-")]
    Minus,
    #[token("...")]
    Ellipsis,

    // Integer with underscores
    #[regex(r"[0-9][0-9_]*", |lex| lex.slice().replace('_', "").parse::<i64>().ok())]
    Int(i64),

    // Float with a fraction, an exponent, or both
    #[regex(
        r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?|[0-9][0-9_]*[eE][+-]?[0-9]+",
        |lex| lex.slice().replace('_', "").parse::<f64>().ok()
    )]
    Float(f64),

    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"b'([^'\\]|\\.)*'")]
    #[regex(r#"b"([^"\\]|\\.)*""#)]
    Bytes,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Token kind with decoded payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LBracket,
    RBracket,
    Comma,
    Pipe,
    Minus,
    Ellipsis,
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Ident(String),
    Eof,
}

impl TokenKind {
    /// Short description for error messages.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::LBracket => "`[`".to_string(),
            TokenKind::RBracket => "`]`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Pipe => "`|`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Ellipsis => "`...`".to_string(),
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Float(x) => format!("float `{x:?}`"),
            TokenKind::Str(s) => format!("string {s:?}"),
            TokenKind::Bytes(_) => "byte string".to_string(),
            TokenKind::Ident(name) => format!("`{name}`"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Lex `source` into tokens, ending with `Eof`.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let Ok(raw) = result else {
            return Err(ParseError::InvalidToken { span });
        };
        let slice = lexer.slice();
        let kind = match raw {
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Ellipsis => TokenKind::Ellipsis,
            RawToken::Int(n) => TokenKind::Int(n),
            RawToken::Float(x) => TokenKind::Float(x),
            RawToken::Str => TokenKind::Str(
                unescape_str(strip_quotes(slice)).ok_or(ParseError::BadEscape { span })?,
            ),
            RawToken::Bytes => TokenKind::Bytes(
                unescape_bytes(strip_quotes(&slice[1..])).ok_or(ParseError::BadEscape { span })?,
            ),
            RawToken::Ident => TokenKind::Ident(slice.to_string()),
        };
        tokens.push(Token { kind, span });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::from_range(source.len()..source.len()),
    });
    Ok(tokens)
}

/// Drop the surrounding quote characters. Both are ASCII.
fn strip_quotes(quoted: &str) -> &str {
    quoted.get(1..quoted.len().saturating_sub(1)).unwrap_or("")
}

/// One decoded escape: either a character or a raw `\xHH` byte.
enum Escape {
    Char(char),
    Byte(u8),
}

fn read_escape(chars: &mut std::str::Chars<'_>) -> Option<Escape> {
    Some(match chars.next()? {
        '\\' => Escape::Char('\\'),
        '\'' => Escape::Char('\''),
        '"' => Escape::Char('"'),
        'n' => Escape::Char('\n'),
        't' => Escape::Char('\t'),
        'r' => Escape::Char('\r'),
        '0' => Escape::Char('\0'),
        'x' => {
            let hi = chars.next()?.to_digit(16)?;
            let lo = chars.next()?.to_digit(16)?;
            Escape::Byte(u8::try_from(hi * 16 + lo).ok()?)
        }
        _ => return None,
    })
}

fn unescape_str(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match read_escape(&mut chars)? {
            Escape::Char(c) => out.push(c),
            Escape::Byte(b) => out.push(char::from(b)),
        }
    }
    Some(out)
}

fn unescape_bytes(body: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let c = if c == '\\' {
            match read_escape(&mut chars)? {
                Escape::Char(c) => c,
                Escape::Byte(b) => {
                    out.push(b);
                    continue;
                }
            }
        } else {
            c
        };
        // Byte strings hold ASCII only; anything wider must be escaped.
        out.push(u8::try_from(c).ok().filter(u8::is_ascii)?);
    }
    Some(out)
}
