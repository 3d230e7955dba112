//! 文法テストの共通モジュール
//!
//! 文法テストで使用する共通のヘルパー関数を定義する。

use idlparse::ast::*;
use idlparse::error::ParseError;
use idlparse::parse_idl;

/// ソースを解析してASTを取得するヘルパー関数
pub fn parse_source(source: &str) -> Result<Vec<Expr>, ParseError> {
    parse_idl(source)
}

/// 解析に成功し、書き戻すと元のソースに一致することを確認するヘルパー関数
pub fn assert_parse_success(source: &str) -> Vec<Expr> {
    let exprs = parse_source(source).expect("Parsing should succeed");
    assert_eq!(to_idl_source(&exprs), source, "AST should print back to the source");
    exprs
}

/// 解析に失敗することを確認するヘルパー関数
pub fn assert_parse_error(source: &str) -> ParseError {
    parse_source(source).expect_err("Parsing should fail")
}

/// 空白を除いたノード
pub fn significant(exprs: &[Expr]) -> Vec<&Expr> {
    exprs.iter().filter(|e| !e.is_space()).collect()
}

/// `typedef <ty> T;` を解析して型を取り出す
pub fn parse_typedef_type(ty: &str) -> Type {
    let source = format!("typedef {} T;", ty);
    let exprs = assert_parse_success(&source);
    match exprs.as_slice() {
        [Expr::TypeDef(typedef)] => typedef.ty.clone(),
        other => panic!("Expected a single typedef, got {:?}", other),
    }
}

// サブモジュールの宣言
#[cfg(test)]
mod decl_test;
#[cfg(test)]
mod macro_test;
#[cfg(test)]
mod type_test;
