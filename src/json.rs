//! Projection of the AST into a generic JSON tree.
//!
//! Each node becomes `{type, name?, value?, children?}`. Whitespace nodes are
//! dropped at every depth; everything else keeps its source order.

use serde::{Deserialize, Serialize};

use crate::ast::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlJson {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<IdlJson>>,
}

impl IdlJson {
    fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: None,
            value: None,
            children: None,
        }
    }

    fn with_name(mut self, name: &Name) -> Self {
        self.name = Some(name.value.clone());
        self
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    fn with_children(mut self, children: Vec<IdlJson>) -> Self {
        self.children = Some(children);
        self
    }
}

/// Project a single node. Returns `None` for whitespace.
pub fn expr_to_json(expr: &Expr) -> Option<IdlJson> {
    let tag = expr.tag();
    let json = match expr {
        Expr::Space(_) => return None,
        Expr::Comment(comment) => IdlJson::new(tag).with_value(comment.value()),
        Expr::Name(name) => IdlJson::new(tag).with_value(name.value.clone()),
        Expr::Sym(sym) => IdlJson::new(tag).with_value(sym.value.clone()),
        Expr::Type(ty) => IdlJson::new(tag).with_value(ty.value()),
        Expr::Module(module) => IdlJson::new(tag)
            .with_name(&module.name)
            .with_children(to_json(&module.body)),
        Expr::TypeDef(typedef) => IdlJson::new(tag)
            .with_name(&typedef.name)
            .with_value(typedef.ty.value()),
        Expr::Struct(s) => IdlJson::new(tag).with_name(&s.name).with_children(
            s.fields()
                .map(|field| {
                    IdlJson::new("field")
                        .with_name(&field.name)
                        .with_value(field.ty.value())
                })
                .collect(),
        ),
        Expr::Macro(Macro::Define(define)) => IdlJson::new(tag).with_name(&define.name),
        Expr::Macro(Macro::IfNDef(ifndef)) => IdlJson::new(tag)
            .with_name(&ifndef.name)
            .with_children(to_json(&ifndef.body)),
        Expr::Macro(Macro::Include(include)) => {
            IdlJson::new(tag).with_value(include.filename.clone())
        }
    };
    Some(json)
}

/// Project a sequence of nodes, dropping whitespace
pub fn to_json(exprs: &[Expr]) -> Vec<IdlJson> {
    exprs.iter().filter_map(expr_to_json).collect()
}

/// Project and render as JSON text
pub fn to_json_string(exprs: &[Expr], pretty: bool) -> serde_json::Result<String> {
    let json = to_json(exprs);
    if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    }
}
