//! iolist: 文字列を効率的に組み立てるための入れ子構造

use std::borrow::Cow;
use std::fmt;

/// 文字列、または文字列・iolistの入れ子リスト
///
/// 出力時に深さ優先で連結されるまで平坦化されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoList {
    Str(Cow<'static, str>),
    List(Vec<IoList>),
}

impl IoList {
    /// 空のiolist
    pub fn empty() -> Self {
        IoList::List(Vec::new())
    }

    /// 深さ優先で連結して単一の文字列にする
    pub fn flatten(&self) -> String {
        let mut out = String::with_capacity(self.len());
        self.write_into(&mut out);
        out
    }

    /// 平坦化したときのバイト長
    pub fn len(&self) -> usize {
        match self {
            IoList::Str(s) => s.len(),
            IoList::List(items) => items.iter().map(IoList::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write_into(&self, out: &mut String) {
        match self {
            IoList::Str(s) => out.push_str(s),
            IoList::List(items) => {
                for item in items {
                    item.write_into(out);
                }
            }
        }
    }
}

impl From<&'static str> for IoList {
    fn from(s: &'static str) -> Self {
        IoList::Str(Cow::Borrowed(s))
    }
}

impl From<String> for IoList {
    fn from(s: String) -> Self {
        IoList::Str(Cow::Owned(s))
    }
}

impl From<Vec<IoList>> for IoList {
    fn from(items: Vec<IoList>) -> Self {
        IoList::List(items)
    }
}

impl FromIterator<IoList> for IoList {
    fn from_iter<I: IntoIterator<Item = IoList>>(iter: I) -> Self {
        IoList::List(iter.into_iter().collect())
    }
}

impl fmt::Display for IoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoList::Str(s) => f.write_str(s),
            IoList::List(items) => items.iter().try_for_each(|item| fmt::Display::fmt(item, f)),
        }
    }
}

/// IDLのソーステキストへ書き戻せるノード
pub trait ToIdlString {
    fn to_idl_string(&self) -> IoList;
}

impl<T: ToIdlString> ToIdlString for [T] {
    fn to_idl_string(&self) -> IoList {
        self.iter().map(ToIdlString::to_idl_string).collect()
    }
}

impl<T: ToIdlString> ToIdlString for Vec<T> {
    fn to_idl_string(&self) -> IoList {
        self.as_slice().to_idl_string()
    }
}

/// iolistを平坦化した文字列に変換
pub fn iolist_to_string(iolist: &IoList) -> String {
    iolist.flatten()
}
