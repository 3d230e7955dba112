//! 宣言（typedef / struct / module）の文法テスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_typedef() {
    let exprs = assert_parse_success("typedef long long Counter;");
    assert_eq!(exprs.len(), 1);

    if let Expr::TypeDef(ref typedef) = exprs[0] {
        assert_eq!(typedef.name.value, "Counter");
        assert_eq!(typedef.ty.value(), "long long");
        assert_eq!(typedef.after_keyword.text, " ");
        assert_eq!(typedef.after_type.text, " ");
        assert!(typedef.before_semicolon.is_empty());
    } else {
        panic!("Expected typedef");
    }
}

#[test]
fn test_typedef_with_irregular_spacing() {
    let source = "typedef\n\tunsigned short\t Port  ;";
    let exprs = assert_parse_success(source);

    if let Expr::TypeDef(ref typedef) = exprs[0] {
        assert_eq!(typedef.name.value, "Port");
        assert_eq!(typedef.ty.value(), "unsigned short");
        assert_eq!(typedef.before_semicolon.text, "  ");
    } else {
        panic!("Expected typedef");
    }
}

#[test]
fn test_keyword_boundary_in_struct_fields() {
    // shortValue は short + Value ではなく型名として扱われる
    let source = "struct S { shortValue v; short s; };";
    let exprs = assert_parse_success(source);

    let Expr::Struct(ref s) = exprs[0] else {
        panic!("Expected struct");
    };
    let fields: Vec<_> = s.fields().collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].ty, Type::Named(Name::new("shortValue")));
    assert_eq!(fields[0].name.value, "v");
    assert_eq!(fields[1].ty.value(), "short");
    assert_eq!(fields[1].name.value, "s");
}

#[test]
fn test_struct_preserves_comments_between_fields() {
    let source = r#"struct Point {
    // x coordinate
    double x;
    /* y coordinate */
    double y ;
};"#;
    let exprs = assert_parse_success(source);

    let Expr::Struct(ref s) = exprs[0] else {
        panic!("Expected struct");
    };
    assert_eq!(s.name.value, "Point");

    let kinds: Vec<&str> = s
        .body
        .iter()
        .filter_map(|item| match item {
            StructItem::Field(_) => Some("field"),
            StructItem::Comment(_) => Some("comment"),
            StructItem::Space(_) => None,
        })
        .collect();
    assert_eq!(kinds, vec!["comment", "field", "comment", "field"]);

    let names: Vec<&str> = s.fields().map(|f| f.name.value.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);

    if let StructItem::Comment(ref comment) = s.body[1] {
        assert_eq!(comment.value(), " x coordinate");
    } else {
        panic!("Expected comment after leading space");
    }
}

#[test]
fn test_empty_struct() {
    let exprs = assert_parse_success("struct Empty {};");
    let Expr::Struct(ref s) = exprs[0] else {
        panic!("Expected struct");
    };
    assert!(s.body.is_empty());
    assert_eq!(s.before_brace.text, " ");
}

#[test]
fn test_struct_without_space_before_brace() {
    let exprs = assert_parse_success("struct S{long a;} ;");
    let Expr::Struct(ref s) = exprs[0] else {
        panic!("Expected struct");
    };
    assert!(s.before_brace.is_empty());
    assert_eq!(s.before_semicolon.text, " ");
    assert_eq!(s.fields().count(), 1);
}

#[test]
fn test_nested_module() {
    let source = "module M { struct S { long f; }; };";
    let exprs = assert_parse_success(source);
    assert_eq!(exprs.len(), 1);

    let Expr::Module(ref module) = exprs[0] else {
        panic!("Expected module");
    };
    assert_eq!(module.name.value, "M");

    let body = significant(&module.body);
    assert_eq!(body.len(), 1);
    let Expr::Struct(s) = body[0] else {
        panic!("Expected struct in module body");
    };
    assert_eq!(s.name.value, "S");
    let fields: Vec<_> = s.fields().collect();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].ty.value(), "long");
    assert_eq!(fields[0].name.value, "f");
}

#[test]
fn test_deeply_nested_modules() {
    let source = r#"module A {
    module B {
        module C {
            typedef long Id;
        };
    };
};
"#;
    let exprs = assert_parse_success(source);

    let mut current = &exprs;
    for expected in ["A", "B", "C"] {
        let module = significant(current)
            .into_iter()
            .find_map(|e| match e {
                Expr::Module(m) => Some(m),
                _ => None,
            })
            .expect("Expected nested module");
        assert_eq!(module.name.value, expected);
        current = &module.body;
    }

    let inner = significant(current);
    assert!(matches!(inner[0], Expr::TypeDef(_)));
}

#[test]
fn test_empty_module() {
    let exprs = assert_parse_success("module Empty {\n};\n");
    let Expr::Module(ref module) = exprs[0] else {
        panic!("Expected module");
    };
    assert_eq!(module.body.len(), 1);
    assert!(module.body[0].is_space());
    assert!(exprs[1].is_space());
}

#[test]
fn test_module_keyword_requires_boundary() {
    // moduleX は module キーワードではない
    let err = assert_parse_error("moduleX M { };");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}

#[test]
fn test_invalid_module_body_is_fatal() {
    // モジュール本体に式として解釈できないものがあれば致命的エラー
    let err = assert_parse_error("module M { long x; };");
    match err {
        ParseError::ExpectedOne {
            parser,
            found,
            span,
            ..
        } => {
            assert_eq!(parser, "exprParser");
            assert_eq!(found, 0);
            assert_eq!(span.start, 11);
        }
        other => panic!("Expected ExpectedOne, got {:?}", other),
    }
}

#[test]
fn test_invalid_struct_body_is_fatal() {
    let err = assert_parse_error("struct S { long; };");
    match err {
        ParseError::ExpectedOne { parser, span, .. } => {
            assert_eq!(parser, "structBodyItemParser");
            assert_eq!(span.start, 11);
        }
        other => panic!("Expected ExpectedOne, got {:?}", other),
    }
}

#[test]
fn test_unterminated_struct_is_fatal() {
    let err = assert_parse_error("struct S { long a;");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}
