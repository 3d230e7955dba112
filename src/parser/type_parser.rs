//! 型式の解析
//!
//! 左優先の選択なので順序に意味がある。キーワードの型は識別子としての型名より前に、
//! 固定長文字列は（同じ`string`で始まる）可変長文字列より前に試す。

use crate::ast::*;
use crate::then_all;

use super::combinators::{consumed, map, or_all, recursive};
use super::core::Parser;
use super::lexical::{char_parser, integer, keyword, maybe_space, space, word};

/// 整数型 `short` / `long` / `long long`
pub fn ordinal_type() -> Parser<NumberKind> {
    or_all([
        map(then_all!(keyword("long"), space(), keyword("long")), |_| {
            NumberKind::LongLong
        }),
        map(keyword("long"), |_| NumberKind::Long),
        map(keyword("short"), |_| NumberKind::Short),
    ])
    .named("ordNumTypeParser")
}

/// 実数型 `float` / `double` / `fixed`
pub fn real_type() -> Parser<NumberKind> {
    or_all([
        map(keyword("float"), |_| NumberKind::Float),
        map(keyword("double"), |_| NumberKind::Double),
        map(keyword("fixed"), |_| NumberKind::Fixed),
    ])
    .named("realNumTypeParser")
}

/// 数値型（`unsigned`付きの整数型を含む）。綴りはそのまま保持する
pub fn number_type() -> Parser<NumberType> {
    let unsigned = map(
        then_all!(keyword("unsigned"), space(), ordinal_type()),
        |(_, _, kind)| kind.to_unsigned().unwrap_or(kind),
    );
    map(
        consumed(or_all([unsigned, ordinal_type(), real_type()])),
        |(text, kind)| NumberType { kind, text },
    )
    .named("numTypeParser")
}

/// `string<N>`
pub fn fix_string_type() -> Parser<FixString> {
    map(
        then_all!(
            keyword("string"),
            maybe_space(),
            char_parser('<'),
            maybe_space(),
            consumed(integer()),
            maybe_space(),
            char_parser('>'),
        ),
        |(_, before_open, _, before_length, (length_text, length), after_length, _)| FixString {
            length,
            length_text,
            before_open,
            before_length,
            after_length,
        },
    )
    .named("fixStringTypeParser")
}

/// `string`
pub fn var_string_type() -> Parser<VarString> {
    map(keyword("string"), |_| VarString).named("varStringTypeParser")
}

/// `sequence<T>`（要素型は再帰的に`ty`で解析する）
pub fn sequence_type(ty: Parser<Type>) -> Parser<Sequence> {
    map(
        then_all!(
            keyword("sequence"),
            maybe_space(),
            char_parser('<'),
            maybe_space(),
            ty,
            maybe_space(),
            char_parser('>'),
        ),
        |(_, before_open, _, before_element, element, after_element, _)| Sequence {
            element: Box::new(element),
            before_open,
            before_element,
            after_element,
        },
    )
    .named("sequenceTypeParser")
}

/// 型式全体
pub fn type_parser() -> Parser<Type> {
    recursive("typeParser", |ty| {
        or_all([
            map(sequence_type(ty), Type::Sequence),
            map(number_type(), Type::Number),
            map(fix_string_type(), Type::FixString),
            map(var_string_type(), Type::VarString),
            map(word(), |name| Type::Named(Name::new(name))),
        ])
    })
}
