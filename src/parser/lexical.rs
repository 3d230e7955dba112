//! 字句レベルのパーサー
//!
//! 文字、キーワード、数字、識別子、空白、コメントを認識する。すべて
//! [`combinators`](super::combinators)の上に組み立てられている。

use crate::ast::{Comment, MultiLineComment, SingleLineComment, Space};

use super::combinators::{branch, is_valid, map, or, or_all, repeat, success, then};
use super::core::{ParseResult, Parser};

/// 条件を満たす1文字
pub fn satisfy<P>(name: &str, predicate: P) -> Parser<char>
where
    P: Fn(char) -> bool + 'static,
{
    Parser::new(name, move |input: &[char], offset| match input.get(offset) {
        Some(&c) if predicate(c) => Ok(vec![ParseResult::new(offset + 1, c)]),
        _ => Ok(Vec::new()),
    })
}

/// 指定した1文字
pub fn char_parser(expected: char) -> Parser<char> {
    satisfy(&format!("CharParser({:?})", expected), move |c| c == expected)
}

/// 任意の1文字（入力の終端では失敗）
pub fn any_char() -> Parser<char> {
    satisfy("AnyCharParser", |_| true)
}

/// `0`-`9`
pub fn digit() -> Parser<char> {
    satisfy("DigitParser", |c| c.is_ascii_digit())
}

/// 英字 `A`-`Z` / `a`-`z`
pub fn eng_char() -> Parser<char> {
    satisfy("EngCharParser", |c| c.is_ascii_alphabetic())
}

/// 識別子の先頭文字 `[A-Za-z_]`
pub fn word_head() -> Parser<char> {
    or(eng_char(), char_parser('_')).named("wordHeadParser")
}

/// 識別子の2文字目以降 `[A-Za-z0-9_]`
pub fn word_char() -> Parser<char> {
    or(word_head(), digit()).named("wordCharParser")
}

/// 停止文字: 識別子を構成しない文字（入力の終端も含む）
pub fn is_stop_char(c: Option<char>) -> bool {
    !matches!(c, Some(c) if c == '_' || c.is_ascii_alphanumeric())
}

/// 停止文字の先読み（入力は消費しない）
///
/// 現在位置で[`word_char`]が成功しないときだけ成功する。
pub fn stop_char() -> Parser<()> {
    let word_char = word_char();
    Parser::new("StopCharParser", move |input, offset| {
        if is_valid(&word_char, input, offset)? {
            Ok(Vec::new())
        } else {
            Ok(vec![ParseResult::new(offset, ())])
        }
    })
}

/// 文字列そのもの（直後の文字は検査しない）
pub fn literal(text: &'static str) -> Parser<&'static str> {
    let expected: Vec<char> = text.chars().collect();
    Parser::new(format!("LiteralParser({})", text), move |input, offset| {
        let end = offset + expected.len();
        if input.get(offset..end) == Some(expected.as_slice()) {
            Ok(vec![ParseResult::new(end, text)])
        } else {
            Ok(Vec::new())
        }
    })
}

/// キーワード: 文字列の直後が停止文字であることも要求する
///
/// これにより`shortint`が`short`と`int`に分かれて認識されることはない。
pub fn keyword(text: &'static str) -> Parser<&'static str> {
    map(then(literal(text), stop_char()), |(kw, ())| kw)
        .named(format!("CharSeqParser({})", text))
}

/// 10進数の整数（最長一致）
///
/// 先頭が数字でなければ失敗する。`u64`に収まらない場合も失敗する。
pub fn integer() -> Parser<u64> {
    Parser::new("IntegerParser", |input: &[char], start| {
        let mut offset = start;
        let mut acc: u64 = 0;
        while let Some(d) = input.get(offset).and_then(|c| c.to_digit(10)) {
            acc = match acc.checked_mul(10).and_then(|v| v.checked_add(u64::from(d))) {
                Some(v) => v,
                None => return Ok(Vec::new()),
            };
            offset += 1;
        }
        if offset == start {
            return Ok(Vec::new());
        }
        Ok(vec![ParseResult::new(offset, acc)])
    })
}

/// 識別子 `[A-Za-z_][A-Za-z0-9_]*`
pub fn word() -> Parser<String> {
    map(then(word_head(), repeat(word_char())), |(head, body)| {
        std::iter::once(head).chain(body).collect()
    })
    .named("wordParser")
}

pub fn is_space_char(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t')
}

/// 空白文字1つ
pub fn space_char() -> Parser<char> {
    or_all([
        char_parser(' '),
        char_parser('\n'),
        char_parser('\r'),
        char_parser('\t'),
    ])
    .named("spaceCharParser")
}

/// 1文字以上の空白（マッチしたテキストをそのまま保持）
pub fn space() -> Parser<Space> {
    map(then(space_char(), repeat(space_char())), |(head, rest)| {
        Space::new(std::iter::once(head).chain(rest).collect::<String>())
    })
    .named("spaceParser")
}

/// 0文字以上の空白（常に成功する）
pub fn maybe_space() -> Parser<Space> {
    branch(
        |input, offset| input.get(offset).copied().is_some_and(is_space_char),
        space(),
        success(Space::empty()),
    )
    .named("maybeSpaceParser")
}

/// 行末: 改行の前の空白・タブも含める
pub fn line_break() -> Parser<Space> {
    Parser::new("LineBreakParser", |input: &[char], start| {
        let mut offset = start;
        while matches!(input.get(offset), Some(' ' | '\t' | '\r')) {
            offset += 1;
        }
        if input.get(offset) != Some(&'\n') {
            return Ok(Vec::new());
        }
        offset += 1;
        let text: String = input[start..offset].iter().collect();
        Ok(vec![ParseResult::new(offset, Space::new(text))])
    })
}

/// `//`から行末までのコメント
///
/// 改行は消費するが値には含めない。入力の終端で終わるコメントも受け付ける。
pub fn single_line_comment() -> Parser<SingleLineComment> {
    Parser::new("SingleLineCommentParser", |input: &[char], start| {
        if input.get(start..start + 2) != Some(&['/', '/'][..]) {
            return Ok(Vec::new());
        }
        let body_start = start + 2;
        let (body_end, offset, terminated) =
            match input[body_start..].iter().position(|&c| c == '\n') {
                Some(pos) => (body_start + pos, body_start + pos + 1, true),
                None => (input.len(), input.len(), false),
            };
        let value: String = input[body_start..body_end].iter().collect();
        Ok(vec![ParseResult::new(
            offset,
            SingleLineComment { value, terminated },
        )])
    })
}

/// `/*`から最初の`*/`までのコメント。閉じられていなければ失敗する
pub fn multi_line_comment() -> Parser<MultiLineComment> {
    Parser::new("MultiLineCommentParser", |input: &[char], start| {
        if input.get(start..start + 2) != Some(&['/', '*'][..]) {
            return Ok(Vec::new());
        }
        let body_start = start + 2;
        let close = input[body_start..]
            .windows(2)
            .position(|pair| pair == ['*', '/'].as_slice());
        match close {
            Some(pos) => {
                let value: String = input[body_start..body_start + pos].iter().collect();
                Ok(vec![ParseResult::new(
                    body_start + pos + 2,
                    MultiLineComment { value },
                )])
            }
            None => Ok(Vec::new()),
        }
    })
}

/// 1行コメントまたは複数行コメント
pub fn comment() -> Parser<Comment> {
    or(
        map(single_line_comment(), Comment::SingleLine),
        map(multi_line_comment(), Comment::MultiLine),
    )
    .named("commentParser")
}
