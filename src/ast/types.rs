//! 型式の定義

use serde::{Deserialize, Serialize};

use super::iolist::{IoList, ToIdlString};
use super::{Name, Space};

/// 型の表現
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    // 数値型
    Number(NumberType),

    // 文字列型
    VarString(VarString),
    FixString(FixString),

    // 複合型
    Sequence(Sequence),

    // typedefされた型名
    Named(Name),
}

impl Type {
    /// 空白を正規化した型の綴り（例: `long long`, `string<10>`, `sequence<long>`）
    pub fn value(&self) -> String {
        match self {
            Type::Number(n) => n.kind.as_str().to_string(),
            Type::VarString(_) => "string".to_string(),
            Type::FixString(s) => format!("string<{}>", s.length),
            Type::Sequence(s) => format!("sequence<{}>", s.element.value()),
            Type::Named(name) => name.value.clone(),
        }
    }
}

impl ToIdlString for Type {
    fn to_idl_string(&self) -> IoList {
        match self {
            Type::Number(n) => n.to_idl_string(),
            Type::VarString(s) => s.to_idl_string(),
            Type::FixString(s) => s.to_idl_string(),
            Type::Sequence(s) => s.to_idl_string(),
            Type::Named(name) => name.to_idl_string(),
        }
    }
}

/// 数値型の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberKind {
    // 整数型
    Short,
    Long,
    LongLong,
    UnsignedShort,
    UnsignedLong,
    UnsignedLongLong,

    // 実数型
    Float,
    Double,
    Fixed,
}

impl NumberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberKind::Short => "short",
            NumberKind::Long => "long",
            NumberKind::LongLong => "long long",
            NumberKind::UnsignedShort => "unsigned short",
            NumberKind::UnsignedLong => "unsigned long",
            NumberKind::UnsignedLongLong => "unsigned long long",
            NumberKind::Float => "float",
            NumberKind::Double => "double",
            NumberKind::Fixed => "fixed",
        }
    }

    /// 対応する符号なし整数型（整数型以外はNone）
    pub fn to_unsigned(self) -> Option<NumberKind> {
        match self {
            NumberKind::Short => Some(NumberKind::UnsignedShort),
            NumberKind::Long => Some(NumberKind::UnsignedLong),
            NumberKind::LongLong => Some(NumberKind::UnsignedLongLong),
            _ => None,
        }
    }

    pub fn is_ordinal(&self) -> bool {
        !matches!(self, NumberKind::Float | NumberKind::Double | NumberKind::Fixed)
    }
}

/// 数値型
///
/// `text`は入力上の綴りをそのまま保持する（`unsigned   long`のような空白も含む）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberType {
    pub kind: NumberKind,
    pub text: String,
}

impl NumberType {
    pub fn new(kind: NumberKind) -> Self {
        Self {
            kind,
            text: kind.as_str().to_string(),
        }
    }
}

impl ToIdlString for NumberType {
    fn to_idl_string(&self) -> IoList {
        self.text.clone().into()
    }
}

/// 可変長文字列型 `string`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarString;

impl ToIdlString for VarString {
    fn to_idl_string(&self) -> IoList {
        "string".into()
    }
}

/// 固定長文字列型 `string<N>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixString {
    pub length: u64,
    /// 長さの数字列（先頭のゼロも保持する）
    pub length_text: String,
    pub before_open: Space,
    pub before_length: Space,
    pub after_length: Space,
}

impl FixString {
    pub fn new(length: u64) -> Self {
        Self {
            length,
            length_text: length.to_string(),
            before_open: Space::empty(),
            before_length: Space::empty(),
            after_length: Space::empty(),
        }
    }
}

impl ToIdlString for FixString {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "string".into(),
            self.before_open.to_idl_string(),
            "<".into(),
            self.before_length.to_idl_string(),
            self.length_text.clone().into(),
            self.after_length.to_idl_string(),
            ">".into(),
        ])
    }
}

/// シーケンス型 `sequence<T>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub element: Box<Type>,
    pub before_open: Space,
    pub before_element: Space,
    pub after_element: Space,
}

impl Sequence {
    pub fn new(element: Type) -> Self {
        Self {
            element: Box::new(element),
            before_open: Space::empty(),
            before_element: Space::empty(),
            after_element: Space::empty(),
        }
    }
}

impl ToIdlString for Sequence {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "sequence".into(),
            self.before_open.to_idl_string(),
            "<".into(),
            self.before_element.to_idl_string(),
            self.element.to_idl_string(),
            self.after_element.to_idl_string(),
            ">".into(),
        ])
    }
}
