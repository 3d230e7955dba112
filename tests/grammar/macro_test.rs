//! マクロとコメントの文法テスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_define() {
    let exprs = assert_parse_success("#define SAMPLE_IDL\n");
    assert_eq!(exprs.len(), 1);

    if let Expr::Macro(Macro::Define(ref define)) = exprs[0] {
        assert_eq!(define.name.value, "SAMPLE_IDL");
        assert_eq!(define.after_keyword.text, " ");
        assert_eq!(define.trailing.text, "\n");
    } else {
        panic!("Expected #define");
    }
}

#[test]
fn test_define_requires_trailing_space() {
    // #define の後ろには空白が必要
    let err = assert_parse_error("#define SAMPLE_IDL");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}

#[test]
fn test_include() {
    let exprs = assert_parse_success("#include \"common/types.idl\"\n\n");
    if let Expr::Macro(Macro::Include(ref include)) = exprs[0] {
        assert_eq!(include.filename, "common/types.idl");
        assert_eq!(include.trailing.text, "\n\n");
    } else {
        panic!("Expected #include");
    }
}

#[test]
fn test_include_unterminated_filename() {
    let err = assert_parse_error("#include \"types.idl\n");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}

#[test]
fn test_include_guard() {
    let source = r#"#ifndef SAMPLE_IDL
#define SAMPLE_IDL
typedef long T;
#endif
"#;
    let exprs = assert_parse_success(source);
    assert_eq!(exprs.len(), 2);
    assert!(exprs[1].is_space());

    let Expr::Macro(Macro::IfNDef(ref ifndef)) = exprs[0] else {
        panic!("Expected #ifndef");
    };
    assert_eq!(ifndef.name.value, "SAMPLE_IDL");
    assert_eq!(ifndef.line_break.text, "\n");

    let body = significant(&ifndef.body);
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0], Expr::Macro(Macro::Define(_))));
    assert!(matches!(body[1], Expr::TypeDef(_)));
}

#[test]
fn test_ifndef_header_trailing_blanks() {
    // 行末の空白・タブも行末の一部として保持する
    let source = "#ifndef GUARD \t\r\n#endif";
    let exprs = assert_parse_success(source);
    let Expr::Macro(Macro::IfNDef(ref ifndef)) = exprs[0] else {
        panic!("Expected #ifndef");
    };
    assert_eq!(ifndef.line_break.text, " \t\r\n");
    assert!(ifndef.body.is_empty());
}

#[test]
fn test_ifndef_requires_line_break() {
    let err = assert_parse_error("#ifndef GUARD typedef long T;\n#endif\n");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}

#[test]
fn test_ifndef_without_endif() {
    let err = assert_parse_error("#ifndef GUARD\ntypedef long T;\n");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}

#[test]
fn test_ifndef_inside_module() {
    let source = "module M {\n#ifndef X\ntypedef long T;\n#endif\n};";
    let exprs = assert_parse_success(source);
    let Expr::Module(ref module) = exprs[0] else {
        panic!("Expected module");
    };
    let body = significant(&module.body);
    assert!(matches!(body[0], Expr::Macro(Macro::IfNDef(_))));
}

#[test]
fn test_single_line_comment() {
    let exprs = assert_parse_success("// hello\ntypedef long T;");
    assert_eq!(exprs.len(), 2);

    if let Expr::Comment(Comment::SingleLine(ref comment)) = exprs[0] {
        assert_eq!(comment.value, " hello");
        assert!(comment.terminated);
    } else {
        panic!("Expected single line comment");
    }
}

#[test]
fn test_single_line_comment_at_end_of_input() {
    let exprs = assert_parse_success("typedef long T; // trailing");
    let Expr::Comment(Comment::SingleLine(ref comment)) = exprs[2] else {
        panic!("Expected single line comment");
    };
    assert_eq!(comment.value, " trailing");
    assert!(!comment.terminated);
}

#[test]
fn test_multi_line_comment() {
    let source = "/*\n * header\n */\n/* // nested marker */";
    let exprs = assert_parse_success(source);

    let comments: Vec<&str> = exprs
        .iter()
        .filter_map(|e| match e {
            Expr::Comment(c) => Some(c.value()),
            _ => None,
        })
        .collect();
    assert_eq!(comments, vec!["\n * header\n ", " // nested marker "]);
}

#[test]
fn test_multi_line_comment_stops_at_first_close() {
    let exprs = assert_parse_success("/* a */ typedef long T; /* b */");
    assert_eq!(significant(&exprs).len(), 3);
}

#[test]
fn test_unterminated_multi_line_comment() {
    // 閉じられていないコメントは解析できずに残る
    let err = assert_parse_error("typedef long T;\n/* never closed");
    match err {
        ParseError::NotFullyParsed { span, snippet, .. } => {
            assert_eq!(span.start, 16);
            assert_eq!(snippet, "/* never closed");
        }
        other => panic!("Expected NotFullyParsed, got {:?}", other),
    }
}
