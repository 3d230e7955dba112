//! Abstract Syntax Tree (AST) definitions for IDL sources.
//!
//! Every node keeps the whitespace it was parsed with, so serializing a parsed
//! tree with [`ToIdlString`] reproduces the parsed text byte for byte.

use serde::{Deserialize, Serialize};

pub mod iolist;
pub mod types;

pub use iolist::{iolist_to_string, IoList, ToIdlString};
pub use types::{FixString, NumberKind, NumberType, Sequence, Type, VarString};

/// Span information for source location tracking (character offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset + 1,
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Any node that can appear in a file, a module body or an `#ifndef` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Space(Space),
    Comment(Comment),
    Name(Name),
    Sym(Sym),
    Type(Type),
    Module(Module),
    TypeDef(TypeDef),
    Struct(Struct),
    Macro(Macro),
}

impl Expr {
    /// Stable variant tag, used by consumers that project the tree
    pub fn tag(&self) -> &'static str {
        match self {
            Expr::Space(_) => "space",
            Expr::Comment(Comment::SingleLine(_)) => "single line comment",
            Expr::Comment(Comment::MultiLine(_)) => "multiple line comment",
            Expr::Name(_) => "name",
            Expr::Sym(_) => "sym",
            Expr::Type(_) => "type",
            Expr::Module(_) => "module",
            Expr::TypeDef(_) => "typedef",
            Expr::Struct(_) => "struct",
            Expr::Macro(Macro::Define(_)) => "define",
            Expr::Macro(Macro::IfNDef(_)) => "ifndef",
            Expr::Macro(Macro::Include(_)) => "include",
        }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Expr::Space(_))
    }
}

impl ToIdlString for Expr {
    fn to_idl_string(&self) -> IoList {
        match self {
            Expr::Space(s) => s.to_idl_string(),
            Expr::Comment(c) => c.to_idl_string(),
            Expr::Name(n) => n.to_idl_string(),
            Expr::Sym(s) => s.to_idl_string(),
            Expr::Type(t) => t.to_idl_string(),
            Expr::Module(m) => m.to_idl_string(),
            Expr::TypeDef(t) => t.to_idl_string(),
            Expr::Struct(s) => s.to_idl_string(),
            Expr::Macro(m) => m.to_idl_string(),
        }
    }
}

/// A run of whitespace, kept verbatim. May be empty where whitespace is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub text: String,
}

impl Space {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl ToIdlString for Space {
    fn to_idl_string(&self) -> IoList {
        self.text.clone().into()
    }
}

/// Comment node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Comment {
    SingleLine(SingleLineComment),
    MultiLine(MultiLineComment),
}

impl Comment {
    pub fn value(&self) -> &str {
        match self {
            Comment::SingleLine(c) => &c.value,
            Comment::MultiLine(c) => &c.value,
        }
    }
}

impl ToIdlString for Comment {
    fn to_idl_string(&self) -> IoList {
        match self {
            Comment::SingleLine(c) => c.to_idl_string(),
            Comment::MultiLine(c) => c.to_idl_string(),
        }
    }
}

/// `// ...` comment. `value` excludes the delimiter and the line break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleLineComment {
    pub value: String,
    /// false when the comment ran into end of input
    pub terminated: bool,
}

impl ToIdlString for SingleLineComment {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "//".into(),
            self.value.clone().into(),
            if self.terminated { "\n".into() } else { IoList::empty() },
        ])
    }
}

/// `/* ... */` comment. `value` excludes both delimiters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineComment {
    pub value: String,
}

impl ToIdlString for MultiLineComment {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec!["/*".into(), self.value.clone().into(), "*/".into()])
    }
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ToIdlString for Name {
    fn to_idl_string(&self) -> IoList {
        self.value.clone().into()
    }
}

/// Punctuation symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sym {
    pub value: String,
}

impl ToIdlString for Sym {
    fn to_idl_string(&self) -> IoList {
        self.value.clone().into()
    }
}

/// `module Name { ... };`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: Name,
    pub body: Vec<Expr>,
    pub after_keyword: Space,
    pub before_brace: Space,
    pub before_semicolon: Space,
}

impl ToIdlString for Module {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "module".into(),
            self.after_keyword.to_idl_string(),
            self.name.to_idl_string(),
            self.before_brace.to_idl_string(),
            "{".into(),
            self.body.to_idl_string(),
            "}".into(),
            self.before_semicolon.to_idl_string(),
            ";".into(),
        ])
    }
}

/// `typedef Type Name;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub ty: Type,
    pub name: Name,
    pub after_keyword: Space,
    pub after_type: Space,
    pub before_semicolon: Space,
}

impl ToIdlString for TypeDef {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "typedef".into(),
            self.after_keyword.to_idl_string(),
            self.ty.to_idl_string(),
            self.after_type.to_idl_string(),
            self.name.to_idl_string(),
            self.before_semicolon.to_idl_string(),
            ";".into(),
        ])
    }
}

/// `struct Name { fields };`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub name: Name,
    /// Fields together with the comments and whitespace between them, in source order
    pub body: Vec<StructItem>,
    pub after_keyword: Space,
    pub before_brace: Space,
    pub before_semicolon: Space,
}

impl Struct {
    /// Typed fields only, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.body.iter().filter_map(|item| match item {
            StructItem::Field(field) => Some(field),
            _ => None,
        })
    }
}

impl ToIdlString for Struct {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "struct".into(),
            self.after_keyword.to_idl_string(),
            self.name.to_idl_string(),
            self.before_brace.to_idl_string(),
            "{".into(),
            self.body.to_idl_string(),
            "}".into(),
            self.before_semicolon.to_idl_string(),
            ";".into(),
        ])
    }
}

/// One item inside a struct body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructItem {
    Field(Field),
    Comment(Comment),
    Space(Space),
}

impl ToIdlString for StructItem {
    fn to_idl_string(&self) -> IoList {
        match self {
            StructItem::Field(f) => f.to_idl_string(),
            StructItem::Comment(c) => c.to_idl_string(),
            StructItem::Space(s) => s.to_idl_string(),
        }
    }
}

/// `Type name;` inside a struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub ty: Type,
    pub name: Name,
    pub after_type: Space,
    pub before_semicolon: Space,
}

impl ToIdlString for Field {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            self.ty.to_idl_string(),
            self.after_type.to_idl_string(),
            self.name.to_idl_string(),
            self.before_semicolon.to_idl_string(),
            ";".into(),
        ])
    }
}

/// Preprocessor-style directives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Macro {
    Define(Define),
    IfNDef(IfNDef),
    Include(Include),
}

impl ToIdlString for Macro {
    fn to_idl_string(&self) -> IoList {
        match self {
            Macro::Define(d) => d.to_idl_string(),
            Macro::IfNDef(i) => i.to_idl_string(),
            Macro::Include(i) => i.to_idl_string(),
        }
    }
}

/// `#define NAME`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Define {
    pub name: Name,
    pub after_keyword: Space,
    pub trailing: Space,
}

impl ToIdlString for Define {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "#define".into(),
            self.after_keyword.to_idl_string(),
            self.name.to_idl_string(),
            self.trailing.to_idl_string(),
        ])
    }
}

/// `#ifndef NAME` ... `#endif`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfNDef {
    pub name: Name,
    pub body: Vec<Expr>,
    pub after_keyword: Space,
    /// Line break closing the `#ifndef` line, including any blanks before it
    pub line_break: Space,
}

impl ToIdlString for IfNDef {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "#ifndef".into(),
            self.after_keyword.to_idl_string(),
            self.name.to_idl_string(),
            self.line_break.to_idl_string(),
            self.body.to_idl_string(),
            "#endif".into(),
        ])
    }
}

/// `#include "file"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Include {
    pub filename: String,
    pub after_keyword: Space,
    pub trailing: Space,
}

impl ToIdlString for Include {
    fn to_idl_string(&self) -> IoList {
        IoList::List(vec![
            "#include".into(),
            self.after_keyword.to_idl_string(),
            "\"".into(),
            self.filename.clone().into(),
            "\"".into(),
            self.trailing.to_idl_string(),
        ])
    }
}

/// Serialize a sequence of top-level nodes back to IDL source text
pub fn to_idl_source(exprs: &[Expr]) -> String {
    exprs.to_idl_string().flatten()
}
