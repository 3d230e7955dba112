//! パーサーの基本型
//!
//! 入力は変更されない文字列のスライスで、解析が進めるのはオフセットだけ。
//! 1回の解析は候補（`ParseResult`）のリストを返す。空のリストは通常の失敗
//! （兄弟の選択肢へバックトラックできる）、`Err`は致命的な失敗を表す。

use std::fmt;
use std::rc::Rc;

use crate::error::ParseError;

/// 解析の候補1つ: 次のオフセットと解析結果の値
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    pub offset: usize,
    pub value: T,
}

impl<T> ParseResult<T> {
    pub fn new(offset: usize, value: T) -> Self {
        Self { offset, value }
    }

    /// 値だけを変換する（オフセットはそのまま）
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            offset: self.offset,
            value: f(self.value),
        }
    }
}

/// 候補のリスト、または致命的エラー
pub type ParseOutcome<T> = Result<Vec<ParseResult<T>>, ParseError>;

type ParseFn<T> = dyn Fn(&[char], usize) -> ParseOutcome<T>;

/// 名前付きの純粋な解析関数
///
/// 状態を持たないので、同じ値を任意のオフセットで何度でも呼び出せる。
/// 名前はトレースとエラーメッセージのためだけに使われ、制御フローには影響しない。
pub struct Parser<T> {
    name: Rc<str>,
    func: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            func: Rc::clone(&self.func),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Parser").field(&self.name).finish()
    }
}

impl<T: 'static> Parser<T> {
    /// 解析関数から新しいパーサーを作成
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[char], usize) -> ParseOutcome<T> + 'static,
    {
        Self {
            name: Rc::from(name.into()),
            func: Rc::new(func),
        }
    }

    /// 診断用の名前
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 振る舞いを変えずに名前だけを付け替える
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: Rc::from(name.into()),
            func: self.func,
        }
    }

    /// `offset`から解析し、すべての候補を返す
    pub fn parse(&self, input: &[char], offset: usize) -> ParseOutcome<T> {
        (self.func)(input, offset)
    }

    /// 入力全体を先頭から解析する
    pub fn parse_str(&self, source: &str) -> ParseOutcome<T> {
        let input: Vec<char> = source.chars().collect();
        self.parse(&input, 0)
    }
}
