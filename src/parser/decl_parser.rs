//! 宣言の解析: typedef / struct / module

use crate::ast::*;
use crate::then_all;

use super::combinators::{map, or_all, repeat_until, then};
use super::core::Parser;
use super::lexical::{char_parser, comment, keyword, maybe_space, space, word};

/// `}` SP? `;` — ブロックの終端。`;`の前の空白を返す
fn block_tail() -> Parser<Space> {
    map(
        then_all!(char_parser('}'), maybe_space(), char_parser(';')),
        |(_, before_semicolon, _)| before_semicolon,
    )
    .named("blockTailParser")
}

/// `<keyword>` SP name SP? `{` — ブロックの先頭
fn block_head(kw: &'static str) -> Parser<(Space, Name, Space)> {
    map(
        then_all!(keyword(kw), space(), word(), maybe_space(), char_parser('{')),
        |(_, after_keyword, name, before_brace, _)| (after_keyword, Name::new(name), before_brace),
    )
    .named(format!("{}HeadParser", kw))
}

/// `typedef` SP type SP name SP? `;`
pub fn typedef_parser(ty: Parser<Type>) -> Parser<TypeDef> {
    map(
        then_all!(
            keyword("typedef"),
            space(),
            ty,
            space(),
            word(),
            maybe_space(),
            char_parser(';'),
        ),
        |(_, after_keyword, ty, after_type, name, before_semicolon, _)| TypeDef {
            ty,
            name: Name::new(name),
            after_keyword,
            after_type,
            before_semicolon,
        },
    )
    .named("typeDefParser")
}

/// 構造体のフィールド `type SP name SP? ;`
pub fn struct_field_parser(ty: Parser<Type>) -> Parser<Field> {
    map(
        then_all!(ty, space(), word(), maybe_space(), char_parser(';')),
        |(ty, after_type, name, before_semicolon, _)| Field {
            ty,
            name: Name::new(name),
            after_type,
            before_semicolon,
        },
    )
    .named("structFieldParser")
}

/// 構造体本体の1要素: フィールド、コメント、空白のいずれか
pub fn struct_item_parser(ty: Parser<Type>) -> Parser<StructItem> {
    or_all([
        map(struct_field_parser(ty), StructItem::Field),
        map(comment(), StructItem::Comment),
        map(space(), StructItem::Space),
    ])
    .named("structBodyItemParser")
}

/// `struct` SP name SP? `{` item* `}` SP? `;`
pub fn struct_parser(ty: Parser<Type>) -> Parser<Struct> {
    map(
        then(
            block_head("struct"),
            repeat_until(struct_item_parser(ty), block_tail()),
        ),
        |((after_keyword, name, before_brace), (body, before_semicolon))| Struct {
            name,
            body,
            after_keyword,
            before_brace,
            before_semicolon,
        },
    )
    .named("structParser")
}

/// `module` SP name SP? `{` expr* `}` SP? `;`
///
/// 本体にはトップレベルと同じ式の文法がそのまま再帰的に使われる。
pub fn module_parser(expr: Parser<Expr>) -> Parser<Module> {
    map(
        then(block_head("module"), repeat_until(expr, block_tail())),
        |((after_keyword, name, before_brace), (body, before_semicolon))| Module {
            name,
            body,
            after_keyword,
            before_brace,
            before_semicolon,
        },
    )
    .named("moduleParser")
}
