use super::*;
use conform_ir::{ClassRef, RecordDef};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> TypeExpr {
    parse_with(source, &TypeEnv::new())
}

fn parse_with(source: &str, env: &TypeEnv) -> TypeExpr {
    match parse_type(source, env) {
        Ok(expr) => expr,
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_type(source, &TypeEnv::new()) {
        Ok(expr) => panic!("expected {source:?} to fail, got {expr}"),
        Err(err) => err,
    }
}

#[test]
fn builtin_names() {
    assert_eq!(parse("Any"), TypeExpr::Any);
    assert_eq!(parse("int"), TypeExpr::int());
    assert_eq!(parse("object"), TypeExpr::object());
    assert_eq!(parse("None"), TypeExpr::none());
    assert_eq!(parse("NoneType"), TypeExpr::none());
    assert_eq!(parse("list"), TypeExpr::bare(Container::List));
    assert_eq!(parse("Dict"), TypeExpr::bare(Container::Dict));
}

#[test]
fn containers() {
    assert_eq!(parse("list[int]"), TypeExpr::list(TypeExpr::int()));
    assert_eq!(parse("Set[str]"), TypeExpr::set(TypeExpr::str()));
    assert_eq!(
        parse("dict[str, list[float]]"),
        TypeExpr::dict(TypeExpr::str(), TypeExpr::list(TypeExpr::float()))
    );
    assert_eq!(
        parse("tuple[int, str,]"),
        TypeExpr::tuple(vec![TypeExpr::int(), TypeExpr::str()])
    );
    assert_eq!(
        parse("Tuple[bytes, ...]"),
        TypeExpr::variadic_tuple(TypeExpr::bytes())
    );
}

#[test]
fn wrong_container_arity_is_kept() {
    assert_eq!(
        parse("list[int, str]"),
        TypeExpr::generic(Container::List, vec![TypeExpr::int(), TypeExpr::str()])
    );
    assert_eq!(
        parse("list[...]"),
        TypeExpr::generic(Container::List, vec![TypeExpr::Ellipsis])
    );
}

#[test]
fn unions() {
    assert_eq!(
        parse("int | str | None"),
        TypeExpr::union(vec![TypeExpr::int(), TypeExpr::str(), TypeExpr::none()])
    );
    assert_eq!(
        parse("Union[int, str]"),
        TypeExpr::union(vec![TypeExpr::int(), TypeExpr::str()])
    );
    assert_eq!(parse("Optional[int]"), TypeExpr::optional(TypeExpr::int()));
    assert_eq!(
        parse("list[int | None]"),
        TypeExpr::list(TypeExpr::optional(TypeExpr::int()))
    );
}

#[test]
fn literals() {
    assert_eq!(parse("Literal['a', \"b\"]"), TypeExpr::literal(["a", "b"]));
    assert_eq!(
        parse("Literal[1, -2, 2.5, -0.5, True, False, None, b'x']"),
        TypeExpr::Literal(vec![
            Value::Int(1),
            Value::Int(-2),
            Value::Float(2.5),
            Value::Float(-0.5),
            Value::Bool(true),
            Value::Bool(false),
            Value::None,
            Value::bytes(b"x".to_vec()),
        ])
    );
}

#[test]
fn non_finite_floats() {
    assert_eq!(
        parse("Literal[inf, -inf, nan, -nan]"),
        TypeExpr::Literal(vec![
            Value::Float(f64::INFINITY),
            Value::Float(f64::NEG_INFINITY),
            Value::Float(f64::NAN),
            Value::Float(f64::NAN),
        ])
    );
    assert_eq!(parse("inf"), TypeExpr::value(f64::INFINITY));
    assert_eq!(parse("-inf"), TypeExpr::value(f64::NEG_INFINITY));
    assert_eq!(parse("list[nan]"), TypeExpr::list(TypeExpr::value(f64::NAN)));
    assert_eq!(
        parse_err("inf[int]"),
        ParseError::NotGeneric {
            name: "inf".into(),
            span: Span::new(0, 3)
        }
    );
}

#[test]
fn not_required() {
    assert_eq!(
        parse("NotRequired[list[str]]"),
        TypeExpr::optional_field(TypeExpr::list(TypeExpr::str()))
    );
}

#[test]
fn values_in_type_position() {
    assert_eq!(parse("3"), TypeExpr::value(3_i64));
    assert_eq!(parse("-1.5"), TypeExpr::value(-1.5));
    assert_eq!(parse("True"), TypeExpr::value(true));
    assert_eq!(
        parse("list[3]"),
        TypeExpr::list(TypeExpr::value(3_i64))
    );
}

#[test]
fn environment_names() {
    let point = ClassRef::class("Point", []);
    let config = RecordDef::new("Config").field("port", TypeExpr::int());
    let mut env = TypeEnv::new();
    env.define_class(point.clone())
        .define_record(config.clone())
        .define_type_var("T")
        .define_alias("Port", TypeExpr::int());

    assert_eq!(parse_with("Point", &env), TypeExpr::class(point.clone()));
    assert_eq!(parse_with("Config", &env), TypeExpr::record(config));
    assert_eq!(parse_with("list[T]", &env), TypeExpr::list(TypeExpr::type_var("T")));
    assert_eq!(parse_with("Port | None", &env), TypeExpr::optional(TypeExpr::int()));
    assert_eq!(parse_with("'Point'", &env), TypeExpr::class(point));
}

#[test]
fn builtins_cannot_be_shadowed() {
    let mut env = TypeEnv::new();
    env.define_alias("int", TypeExpr::str());
    assert_eq!(parse_with("int", &env), TypeExpr::int());
}

#[test]
fn quoted_names_become_forward_references() {
    assert_eq!(parse("'Node'"), TypeExpr::forward("Node"));
    assert_eq!(
        parse("list['Node']"),
        TypeExpr::list(TypeExpr::forward("Node"))
    );
    assert_eq!(parse("'int'"), TypeExpr::int());
}

#[test]
fn unknown_names() {
    assert_eq!(
        parse_err("list[Foo]"),
        ParseError::UnknownName {
            name: "Foo".into(),
            span: Span::new(5, 8)
        }
    );
    assert_eq!(
        parse_err("Foo[int]"),
        ParseError::UnknownName {
            name: "Foo".into(),
            span: Span::new(0, 3)
        }
    );
}

#[test]
fn subscripting_plain_names() {
    assert_eq!(
        parse_err("int[str]"),
        ParseError::NotGeneric {
            name: "int".into(),
            span: Span::new(0, 3)
        }
    );
}

#[test]
fn special_form_arguments() {
    assert_eq!(
        parse_err("Optional[int, str]"),
        ParseError::WrongArgumentCount {
            name: "Optional".into(),
            expected: "exactly one type argument",
            span: Span::new(0, 18)
        }
    );
    assert_eq!(
        parse_err("list[NotRequired[int, str,]]").span(),
        Span::new(5, 27)
    );
    assert!(matches!(
        parse_err("NotRequired"),
        ParseError::WrongArgumentCount { ref name, .. } if name == "NotRequired"
    ));
    assert!(matches!(
        parse_err("Union"),
        ParseError::WrongArgumentCount { .. }
    ));
}

#[test]
fn bad_literal_arguments() {
    assert_eq!(
        parse_err("Literal[int]"),
        ParseError::BadLiteral {
            found: "`int`".into(),
            span: Span::new(8, 11)
        }
    );
    assert!(matches!(
        parse_err("Literal[]"),
        ParseError::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_err("Literal[-'a']"),
        ParseError::UnexpectedToken { expected: "a number", .. }
    ));
}

#[test]
fn structural_errors() {
    assert_eq!(
        parse_err(""),
        ParseError::UnexpectedEof {
            expected: "a type",
            span: Span::new(0, 0)
        }
    );
    assert_eq!(
        parse_err("list[int"),
        ParseError::UnexpectedEof {
            expected: "`,` or `]`",
            span: Span::new(8, 8)
        }
    );
    assert!(matches!(parse_err("list[]"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("..."), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("int |"), ParseError::UnexpectedEof { .. }));
    assert_eq!(
        parse_err("int str"),
        ParseError::TrailingInput {
            found: "`str`".into(),
            span: Span::new(4, 7)
        }
    );
}

#[test]
fn lexer_errors_pass_through() {
    assert_eq!(
        parse_err("int & str"),
        ParseError::InvalidToken {
            span: Span::new(4, 5)
        }
    );
    assert_eq!(parse_err("int & str").span(), Span::new(4, 5));
}

#[test]
fn display_round_trips() {
    let sources = [
        "Any",
        "int | None",
        "dict[str, list[int | None]]",
        "tuple[int, ...]",
        "tuple[int, str, bytes]",
        "Literal['a', 1, -2.5, True, None, b'\\x00']",
        "Literal[inf, -inf, nan]",
        "tuple[-inf, ...]",
        "NotRequired[set[float]]",
        "Union[int | str, None]",
        "Union[int]",
        "list[int, str]",
        "'Node'",
        "list",
        "object",
    ];
    for source in sources {
        let expr = parse(source);
        assert_eq!(parse(&expr.to_string()), expr, "{source}");
    }
}

#[test]
fn values_that_print_as_types() {
    // `None` and quoted strings are read as types, so these two value
    // forms do not come back as values.
    let none = TypeExpr::value(Value::None);
    assert_eq!(none.to_string(), "None");
    assert_eq!(parse(&none.to_string()), TypeExpr::none());

    let text = TypeExpr::value("x");
    assert_eq!(text.to_string(), "'x'");
    assert_eq!(parse(&text.to_string()), TypeExpr::forward("x"));
}

#[test]
fn deeply_nested_text() {
    let depth = 5_000;
    let source = format!("{}int{}", "list[".repeat(depth), "]".repeat(depth));
    let mut expr = parse(&source);
    let mut levels = 0;
    while let TypeExpr::Generic { mut args, .. } = expr {
        levels += 1;
        expr = args.pop().unwrap_or(TypeExpr::Any);
    }
    assert_eq!(levels, depth);
    assert_eq!(expr, TypeExpr::int());
}
