//! プリプロセッサ風マクロの解析: #define / #ifndef ... #endif / #include

use crate::ast::*;
use crate::then_all;

use super::combinators::{map, repeat_until, then};
use super::core::Parser;
use super::lexical::{any_char, char_parser, keyword, line_break, space, word};

/// `#define` SP name SP
pub fn define_parser() -> Parser<Define> {
    map(
        then_all!(keyword("#define"), space(), word(), space()),
        |(_, after_keyword, name, trailing)| Define {
            name: Name::new(name),
            after_keyword,
            trailing,
        },
    )
    .named("defineParser")
}

/// `#ifndef` SP name NEWLINE expr* `#endif`
pub fn ifndef_parser(expr: Parser<Expr>) -> Parser<IfNDef> {
    let head = then_all!(keyword("#ifndef"), space(), word(), line_break());
    map(
        then(head, repeat_until(expr, keyword("#endif"))),
        |((_, after_keyword, name, newline), (body, _))| IfNDef {
            name: Name::new(name),
            body,
            after_keyword,
            line_break: newline,
        },
    )
    .named("IfNDefParser")
}

/// `#include` SP `"` filename `"` SP
pub fn include_parser() -> Parser<Include> {
    map(
        then_all!(
            keyword("#include"),
            space(),
            char_parser('"'),
            repeat_until(any_char(), char_parser('"')),
            space(),
        ),
        |(_, after_keyword, _, (filename, _), trailing)| Include {
            filename: filename.into_iter().collect(),
            after_keyword,
            trailing,
        },
    )
    .named("includeParser")
}
