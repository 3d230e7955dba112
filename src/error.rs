//! 統一的なエラーハンドリングモジュール
//!
//! パーサーの内部では「候補が空」という結果が通常の失敗（バックトラック可能）を表す。
//! このモジュールの型は、それとは別の致命的な失敗を表す。致命的な失敗は解析全体を
//! 打ち切り、呼び出し元にそのまま返される。

use std::path::{Path, PathBuf};

use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

use crate::ast::Span;

/// IDLパーサーの統一エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdlError {
    /// 構文解析エラー
    #[error("{}: 構文解析エラー: {error}", .file.display())]
    Parse { file: PathBuf, error: ParseError },

    /// ファイルI/Oエラー
    #[error("{}: ファイル操作エラー: {message}", .file.display())]
    Io { file: PathBuf, message: String },
}

impl IdlError {
    pub fn parse(file: impl AsRef<Path>, error: ParseError) -> Self {
        IdlError::Parse {
            file: file.as_ref().to_path_buf(),
            error,
        }
    }

    pub fn io(file: impl AsRef<Path>, error: std::io::Error) -> Self {
        IdlError::Io {
            file: file.as_ref().to_path_buf(),
            message: error.to_string(),
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            IdlError::Parse { file, .. } | IdlError::Io { file, .. } => file,
        }
    }
}

/// パーサーの致命的エラー
///
/// `span`は文字単位のオフセット、`snippet`はその位置から先の未消費の入力の抜粋。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("{parser} はちょうど1つの結果を期待しましたが、{found}個の結果が得られました (オフセット {}, 付近: {snippet:?})", .span.start)]
    ExpectedOne {
        parser: String,
        found: usize,
        span: Span,
        snippet: String,
    },

    #[error("{parser} が入力を消費せずに成功しました (オフセット {}, 付近: {snippet:?})", .span.start)]
    NoProgress {
        parser: String,
        span: Span,
        snippet: String,
    },

    #[error("ファイル全体の解析結果がちょうど1つではありません: {found}個")]
    AmbiguousFile { found: usize },

    #[error("ファイルが最後まで解析されていません: オフセット {} / {length} (付近: {snippet:?})", .span.start)]
    NotFullyParsed {
        span: Span,
        length: usize,
        snippet: String,
    },

    #[error("再帰パーサー {parser} は定義元の文法が破棄された後に使用されました")]
    DetachedRecursion { parser: String },
}

impl ParseError {
    /// エラーが発生したカーソル位置（文字単位）
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::ExpectedOne { span, .. }
            | ParseError::NoProgress { span, .. }
            | ParseError::NotFullyParsed { span, .. } => Some(*span),
            ParseError::AmbiguousFile { .. } | ParseError::DetachedRecursion { .. } => None,
        }
    }
}

/// 診断表示で示す未消費入力の最大文字数
const SNIPPET_LEN: usize = 20;

/// `offset`から先の入力を診断用に切り出す
pub fn snippet(input: &[char], offset: usize) -> String {
    input.iter().skip(offset).take(SNIPPET_LEN).collect()
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: IdlError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: IdlError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    ///
    /// `source`はラベル位置を文字オフセットからバイトオフセットへ変換するために使う。
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            IdlError::Parse { error, .. } => {
                let labels = match error.span() {
                    Some(span) => {
                        let start = byte_offset(source, span.start);
                        let end = byte_offset(source, span.end).max(start);
                        vec![Label::primary(self.file_id, start..end).with_message(match error {
                            ParseError::NotFullyParsed { .. } => "ここから先を解析できません",
                            _ => "ここで解析が中断されました",
                        })]
                    }
                    None => vec![],
                };
                (format!("構文解析エラー: {}", error), labels)
            }
            IdlError::Io { message, .. } => (format!("ファイル操作エラー: {}", message), vec![]),
        };

        Diagnostic::error()
            .with_message(message)
            .with_labels(labels)
    }
}

/// 文字オフセットをバイトオフセットに変換（末尾を超える場合は末尾）
fn byte_offset(source: &str, char_offset: usize) -> usize {
    source
        .char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(source.len())
}

/// Result型のエイリアス
pub type IdlResult<T> = Result<T, IdlError>;
