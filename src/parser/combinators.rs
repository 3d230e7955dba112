//! パーサーコンビネータ
//!
//! 既存のパーサーから新しいパーサーを組み立てる関数群。どれもバックトラック可能で、
//! 通常の不一致は空の候補リストとして伝播する。致命的エラーになるのは
//! 「ちょうど1つの結果」を前提とする箇所（[`run`]とそれを使う繰り返し）だけ。

use std::cell::OnceCell;
use std::rc::Rc;

use crate::ast::Span;
use crate::error::{snippet, ParseError};

use super::core::{ParseOutcome, ParseResult, Parser};

/// 入力を消費せずに常に`value`で成功する
pub fn success<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new("SuccessParser", move |_input, offset| {
        Ok(vec![ParseResult::new(offset, value.clone())])
    })
}

/// 常に（通常の）失敗をする
pub fn failure<T: 'static>(reason: &str) -> Parser<T> {
    Parser::new(format!("FailureParser({})", reason), |_input, _offset| {
        Ok(Vec::new())
    })
}

/// 連接: Aの各候補の位置からBを解析し、成功した組をすべて返す
pub fn then<A, B>(parser_a: Parser<A>, parser_b: Parser<B>) -> Parser<(A, B)>
where
    A: Clone + 'static,
    B: 'static,
{
    let name = format!("({} then {})", parser_a.name(), parser_b.name());
    Parser::new(name, move |input, offset| {
        let mut results = Vec::new();
        for res_a in parser_a.parse(input, offset)? {
            for res_b in parser_b.parse(input, res_a.offset)? {
                results.push(ParseResult::new(
                    res_b.offset,
                    (res_a.value.clone(), res_b.value),
                ));
            }
        }
        Ok(results)
    })
}

/// 左優先の選択
///
/// Aが1つでも候補を返せばそれだけを返し、Bは試さない。Aが失敗したときだけBを試す。
/// したがって選択肢の順序がそのまま優先順位になる。
pub fn or<T: 'static>(parser_a: Parser<T>, parser_b: Parser<T>) -> Parser<T> {
    let name = format!("({} or {})", parser_a.name(), parser_b.name());
    Parser::new(name, move |input, offset| {
        let results = parser_a.parse(input, offset)?;
        if !results.is_empty() {
            return Ok(results);
        }
        parser_b.parse(input, offset)
    })
}

/// [`or`]を左から畳み込む。空なら常に失敗する
pub fn or_all<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .reduce(or)
        .unwrap_or_else(|| failure("empty alternation"))
}

/// 各候補の値を`f`で変換する
pub fn map<A, B, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    let name = format!("(map of {})", parser.name());
    Parser::new(name, move |input, offset| {
        Ok(parser
            .parse(input, offset)?
            .into_iter()
            .map(|res| res.map(&f))
            .collect())
    })
}

/// 解析結果の値と一緒に、消費した入力テキストを返す
pub fn consumed<T: 'static>(parser: Parser<T>) -> Parser<(String, T)> {
    let name = format!("(consumed {})", parser.name());
    Parser::new(name, move |input, offset| {
        Ok(parser
            .parse(input, offset)?
            .into_iter()
            .map(|res| {
                let text: String = input[offset..res.offset].iter().collect();
                res.map(|value| (text, value))
            })
            .collect())
    })
}

/// 入力を消費せずに条件で分岐する
pub fn branch<T, P>(predicate: P, then_parser: Parser<T>, else_parser: Parser<T>) -> Parser<T>
where
    T: 'static,
    P: Fn(&[char], usize) -> bool + 'static,
{
    let name = format!(
        "BranchParser({} else {})",
        then_parser.name(),
        else_parser.name()
    );
    Parser::new(name, move |input, offset| {
        if predicate(input, offset) {
            then_parser.parse(input, offset)
        } else {
            else_parser.parse(input, offset)
        }
    })
}

/// 先読み: `offset`で`parser`が1つ以上の候補を返すか
pub fn is_valid<T: 'static>(
    parser: &Parser<T>,
    input: &[char],
    offset: usize,
) -> Result<bool, ParseError> {
    Ok(!parser.parse(input, offset)?.is_empty())
}

/// ちょうど1つの結果を要求して解析する
///
/// 文法がその位置で曖昧でないことを前提とする箇所で使う。0個または2個以上なら致命的エラー。
pub fn run<T: 'static>(
    parser: &Parser<T>,
    input: &[char],
    offset: usize,
) -> Result<ParseResult<T>, ParseError> {
    log::trace!(
        "({}/{}) run {} [{:?}]",
        offset,
        input.len(),
        parser.name(),
        input.get(offset)
    );
    let results = parser.parse(input, offset)?;
    expect_one(parser, input, offset, results)
}

fn expect_one<T: 'static>(
    parser: &Parser<T>,
    input: &[char],
    offset: usize,
    mut results: Vec<ParseResult<T>>,
) -> Result<ParseResult<T>, ParseError> {
    match results.pop() {
        Some(result) if results.is_empty() => Ok(result),
        popped => Err(ParseError::ExpectedOne {
            parser: parser.name().to_string(),
            found: results.len() + usize::from(popped.is_some()),
            span: Span::point(offset),
            snippet: snippet(input, offset),
        }),
    }
}

/// 貪欲な0回以上の繰り返し
///
/// 現在位置で`parser`が成功する限りその唯一の結果を採用して進み、最初に失敗した所で止まる。
/// 入力を消費しない成功でも止まる。常にちょうど1つの結果を返す。
pub fn repeat<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let name = format!("(repeat {})", parser.name());
    Parser::new(name, move |input, start| {
        let mut items = Vec::new();
        let mut offset = start;
        while offset < input.len() {
            let results = parser.parse(input, offset)?;
            if results.is_empty() {
                break;
            }
            let step = expect_one(&parser, input, offset, results)?;
            if step.offset == offset {
                break;
            }
            offset = step.offset;
            items.push(step.value);
        }
        Ok(vec![ParseResult::new(offset, items)])
    })
}

/// `tail`が現れるまで`body`を繰り返し、最後に`tail`を解析する
///
/// 本体の文法は自分の終端を知らなくてよい。本体の各ステップはちょうど1つの結果を
/// 要求し、満たさなければ致命的エラーになる。
pub fn repeat_until<A, B>(body: Parser<A>, tail: Parser<B>) -> Parser<(Vec<A>, B)>
where
    A: Clone + 'static,
    B: 'static,
{
    let name = format!("ParserRepeatUntil({} until {})", body.name(), tail.name());
    Parser::new(name, move |input, start| {
        log::trace!(
            "({}/{}) repeat {} until {} [{:?}]",
            start,
            input.len(),
            body.name(),
            tail.name(),
            input.get(start)
        );
        let mut items = Vec::new();
        let mut offset = start;
        while offset < input.len() {
            if is_valid(&tail, input, offset)? {
                break;
            }
            let step = run(&body, input, offset)?;
            if step.offset == offset {
                return Err(ParseError::NoProgress {
                    parser: body.name().to_string(),
                    span: Span::point(offset),
                    snippet: snippet(input, offset),
                });
            }
            offset = step.offset;
            items.push(step.value);
        }
        Ok(tail
            .parse(input, offset)?
            .into_iter()
            .map(|res| res.map(|value| (items.clone(), value)))
            .collect())
    })
}

/// 再帰的な文法を定義する
///
/// `build`は自分自身への参照となるパーサーを受け取り、完成したパーサーを返す。
/// 内部の参照は弱参照なので循環参照にはならない。
pub fn recursive<T, F>(name: &str, build: F) -> Parser<T>
where
    T: 'static,
    F: FnOnce(Parser<T>) -> Parser<T>,
{
    let cell: Rc<OnceCell<Parser<T>>> = Rc::new(OnceCell::new());

    let weak = Rc::downgrade(&cell);
    let label = name.to_string();
    let handle = Parser::new(name, move |input, offset| {
        let detached = || ParseError::DetachedRecursion {
            parser: label.clone(),
        };
        let cell = weak.upgrade().ok_or_else(detached)?;
        let parser = cell.get().ok_or_else(detached)?;
        parser.parse(input, offset)
    });

    let parser = build(handle);
    let _ = cell.set(parser);

    let label = name.to_string();
    Parser::new(name, move |input, offset| -> ParseOutcome<T> {
        match cell.get() {
            Some(parser) => parser.parse(input, offset),
            None => Err(ParseError::DetachedRecursion {
                parser: label.clone(),
            }),
        }
    })
}

/// 複数のパーサーを順に連接し、値をフラットなタプルで返す
#[macro_export]
macro_rules! then_all {
    ($p1:expr $(,)?) => {
        $crate::parser::combinators::map($p1, |a1| (a1,))
    };
    ($p1:expr, $p2:expr $(,)?) => {
        $crate::parser::combinators::then($p1, $p2)
    };
    ($p1:expr, $p2:expr, $p3:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then($crate::then_all!($p1, $p2), $p3),
            |((a1, a2), a3)| (a1, a2, a3),
        )
    };
    ($p1:expr, $p2:expr, $p3:expr, $p4:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then($crate::then_all!($p1, $p2, $p3), $p4),
            |((a1, a2, a3), a4)| (a1, a2, a3, a4),
        )
    };
    ($p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then($crate::then_all!($p1, $p2, $p3, $p4), $p5),
            |((a1, a2, a3, a4), a5)| (a1, a2, a3, a4, a5),
        )
    };
    ($p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr, $p6:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then($crate::then_all!($p1, $p2, $p3, $p4, $p5), $p6),
            |((a1, a2, a3, a4, a5), a6)| (a1, a2, a3, a4, a5, a6),
        )
    };
    ($p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr, $p6:expr, $p7:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then(
                $crate::then_all!($p1, $p2, $p3, $p4, $p5, $p6),
                $p7,
            ),
            |((a1, a2, a3, a4, a5, a6), a7)| (a1, a2, a3, a4, a5, a6, a7),
        )
    };
    ($p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr, $p6:expr, $p7:expr, $p8:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then(
                $crate::then_all!($p1, $p2, $p3, $p4, $p5, $p6, $p7),
                $p8,
            ),
            |((a1, a2, a3, a4, a5, a6, a7), a8)| (a1, a2, a3, a4, a5, a6, a7, a8),
        )
    };
    ($p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr, $p6:expr, $p7:expr, $p8:expr, $p9:expr $(,)?) => {
        $crate::parser::combinators::map(
            $crate::parser::combinators::then(
                $crate::then_all!($p1, $p2, $p3, $p4, $p5, $p6, $p7, $p8),
                $p9,
            ),
            |((a1, a2, a3, a4, a5, a6, a7, a8), a9)| (a1, a2, a3, a4, a5, a6, a7, a8, a9),
        )
    };
}
