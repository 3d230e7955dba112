//! トップレベルの文法とファイルの解析

use std::fs;
use std::path::Path;

use crate::ast::*;
use crate::error::{snippet, IdlError, IdlResult, ParseError};

use super::combinators::{map, or_all, recursive, repeat};
use super::core::Parser;
use super::decl_parser::{module_parser, struct_parser, typedef_parser};
use super::lexical::{multi_line_comment, single_line_comment, space};
use super::macro_parser::{define_parser, ifndef_parser, include_parser};
use super::type_parser::type_parser;

/// トップレベルの式
///
/// module と #ifndef の本体はこの文法そのものを再帰的に使う。
pub fn expr_parser() -> Parser<Expr> {
    let ty = type_parser();
    recursive("exprParser", move |expr| {
        or_all([
            map(define_parser(), |d| Expr::Macro(Macro::Define(d))),
            map(include_parser(), |i| Expr::Macro(Macro::Include(i))),
            map(ifndef_parser(expr.clone()), |i| Expr::Macro(Macro::IfNDef(i))),
            map(module_parser(expr), Expr::Module),
            map(typedef_parser(ty.clone()), Expr::TypeDef),
            map(struct_parser(ty), Expr::Struct),
            map(single_line_comment(), |c| {
                Expr::Comment(Comment::SingleLine(c))
            }),
            map(multi_line_comment(), |c| Expr::Comment(Comment::MultiLine(c))),
            map(space(), Expr::Space),
        ])
    })
}

/// ファイル全体: トップレベルの式の繰り返し
pub fn file_parser() -> Parser<Vec<Expr>> {
    repeat(expr_parser()).named("fileParser")
}

/// IDLパーサー
///
/// 文法は作成時に一度だけ組み立てられ、以降の解析で使い回される。
pub struct IdlParser {
    file: Parser<Vec<Expr>>,
}

impl Default for IdlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IdlParser {
    pub fn new() -> Self {
        Self {
            file: file_parser(),
        }
    }

    /// ソース全体を解析する
    ///
    /// 結果がちょうど1つで、かつ入力をすべて消費していなければエラーになる。
    pub fn parse(&self, source: &str) -> Result<Vec<Expr>, ParseError> {
        let input: Vec<char> = source.chars().collect();
        log::debug!("parsing {} characters", input.len());

        let mut results = self.file.parse(&input, 0)?;
        let result = match results.pop() {
            Some(result) if results.is_empty() => result,
            popped => {
                return Err(ParseError::AmbiguousFile {
                    found: results.len() + usize::from(popped.is_some()),
                })
            }
        };

        if result.offset != input.len() {
            return Err(ParseError::NotFullyParsed {
                span: Span::point(result.offset),
                length: input.len(),
                snippet: snippet(&input, result.offset),
            });
        }

        log::debug!("parsed {} top-level expressions", result.value.len());
        Ok(result.value)
    }

    /// ファイルを読み込んで解析する
    pub fn parse_file(&self, path: impl AsRef<Path>) -> IdlResult<Vec<Expr>> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some("idl") {
            log::warn!("input file should be .idl: {}", path.display());
        }
        log::info!("reading {}...", path.display());

        let source = fs::read_to_string(path).map_err(|e| IdlError::io(path, e))?;
        self.parse(&source).map_err(|e| IdlError::parse(path, e))
    }
}

/// ソース文字列を解析する
pub fn parse_idl(source: &str) -> Result<Vec<Expr>, ParseError> {
    IdlParser::new().parse(source)
}

/// IDLファイルを解析する
pub fn parse_idl_file(path: impl AsRef<Path>) -> IdlResult<Vec<Expr>> {
    IdlParser::new().parse_file(path)
}
