//! 型式の文法テスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("short", NumberKind::Short ; "short")]
#[test_case("long", NumberKind::Long ; "long")]
#[test_case("long long", NumberKind::LongLong ; "long long")]
#[test_case("unsigned short", NumberKind::UnsignedShort ; "unsigned short")]
#[test_case("unsigned long", NumberKind::UnsignedLong ; "unsigned long")]
#[test_case("unsigned long long", NumberKind::UnsignedLongLong ; "unsigned long long")]
#[test_case("float", NumberKind::Float ; "float")]
#[test_case("double", NumberKind::Double ; "double")]
#[test_case("fixed", NumberKind::Fixed ; "fixed")]
fn test_number_types(spelling: &str, expected: NumberKind) {
    match parse_typedef_type(spelling) {
        Type::Number(number) => {
            assert_eq!(number.kind, expected);
            assert_eq!(number.text, spelling);
        }
        other => panic!("Expected number type, got {:?}", other),
    }
}

#[test]
fn test_number_type_keeps_inner_spacing() {
    // 正規化された綴りとは別に、元の空白を保持する
    let ty = parse_typedef_type("unsigned \t long  long");
    assert_eq!(ty.value(), "unsigned long long");
    match ty {
        Type::Number(number) => assert_eq!(number.text, "unsigned \t long  long"),
        other => panic!("Expected number type, got {:?}", other),
    }
}

#[test_case("shortValue" ; "keyword prefix")]
#[test_case("long_id" ; "keyword with underscore")]
#[test_case("unsignedlong" ; "joined keywords")]
#[test_case("string8" ; "string with digit")]
#[test_case("Point" ; "plain name")]
fn test_keyword_prefixed_names_are_type_names(name: &str) {
    // キーワードで始まる識別子はキーワードとして分割されない
    assert_eq!(parse_typedef_type(name), Type::Named(Name::new(name)));
}

#[test]
fn test_var_string() {
    assert_eq!(parse_typedef_type("string"), Type::VarString(VarString));
}

#[test]
fn test_fix_string() {
    match parse_typedef_type("string<10>") {
        Type::FixString(s) => {
            assert_eq!(s.length, 10);
            assert_eq!(s.length_text, "10");
        }
        other => panic!("Expected fixed string, got {:?}", other),
    }
}

#[test]
fn test_fix_string_with_spaces() {
    // 山括弧の内側・前の空白もそのまま書き戻せる
    let ty = parse_typedef_type("string < 0010 >");
    assert_eq!(ty.value(), "string<10>");
    match ty {
        Type::FixString(s) => {
            assert_eq!(s.length, 10);
            assert_eq!(s.length_text, "0010");
            assert_eq!(s.before_open.text, " ");
            assert_eq!(s.before_length.text, " ");
            assert_eq!(s.after_length.text, " ");
        }
        other => panic!("Expected fixed string, got {:?}", other),
    }
}

#[test]
fn test_sequence() {
    match parse_typedef_type("sequence<unsigned long>") {
        Type::Sequence(seq) => {
            assert_eq!(seq.element.value(), "unsigned long");
        }
        other => panic!("Expected sequence, got {:?}", other),
    }
}

#[test]
fn test_nested_sequence() {
    let ty = parse_typedef_type("sequence< sequence<string<8>> >");
    assert_eq!(ty.value(), "sequence<sequence<string<8>>>");

    let Type::Sequence(outer) = ty else {
        panic!("Expected sequence");
    };
    let Type::Sequence(inner) = outer.element.as_ref() else {
        panic!("Expected nested sequence");
    };
    assert!(matches!(inner.element.as_ref(), Type::FixString(_)));
}

#[test]
fn test_sequence_of_named_type() {
    let ty = parse_typedef_type("sequence<Point>");
    assert_eq!(ty.value(), "sequence<Point>");
}

#[test]
fn test_string_length_overflow_is_rejected() {
    // u64に収まらない長さは文字列型として認められない
    let err = assert_parse_error("typedef string<99999999999999999999999> T;");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}

#[test]
fn test_unclosed_sequence_is_rejected() {
    let err = assert_parse_error("typedef sequence<long T;");
    assert!(matches!(err, ParseError::NotFullyParsed { .. }));
}
