//! パーサーモジュール
//!
//! 文字単位のバックトラック可能なパーサーコンビネータと、その上に組み立てた
//! IDLの文法を提供します。
//!
//! ## 構成
//!
//! - `core`: 解析結果の候補（`ParseResult`）とパーサー（`Parser`）
//! - `combinators`: 連接、左優先の選択、変換、繰り返し、分岐などの組み立て方
//! - `lexical`: 文字、キーワード、整数、識別子、空白、コメント
//! - `type_parser` / `decl_parser` / `macro_parser`: IDLの各構文
//! - `parser_impl`: トップレベルの式、ファイル全体の解析
//!
//! ## 受け付ける構文
//!
//! ```text
//! #ifndef SAMPLE_IDL
//! #define SAMPLE_IDL
//! #include "base.idl"
//! module Sample {
//!     typedef sequence<unsigned long> Ids;
//!     struct Point {
//!         // 座標
//!         double x;
//!         double y;
//!     };
//! };
//! #endif
//! ```
//!
//! 解析結果を`ToIdlString`で書き戻すと、空白やコメントを含めて元のテキストと一致します。

pub mod combinators;
pub mod core;
pub mod decl_parser;
pub mod lexical;
pub mod macro_parser;
pub mod parser_impl;
pub mod type_parser;

// 公開API
pub use self::core::{ParseOutcome, ParseResult, Parser};
pub use parser_impl::{expr_parser, file_parser, parse_idl, parse_idl_file, IdlParser};
pub use type_parser::type_parser;
