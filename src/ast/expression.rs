use lachs::Span;

use super::datum::Datum;
use crate::types::ty::TypeExp;

#[derive(Debug, Clone)]
pub enum Expr {
    Number(NumberLit),
    Boolean(BooleanLit),
    Str(StringLit),
    Quoted(Quoted),
    Prim(PrimRef),
    Var(VarRef),
    If(Box<IfExp>),
    Lambda(Box<LambdaExp>),
    App(Box<AppExp>),
    Let(Box<LetExp>),
    Letrec(Box<LetrecExp>),
}

impl Expr {
    pub fn pos(&self) -> Span {
        match self {
            Expr::Number(inner) => inner.position.clone(),
            Expr::Boolean(inner) => inner.position.clone(),
            Expr::Str(inner) => inner.position.clone(),
            Expr::Quoted(inner) => inner.position.clone(),
            Expr::Prim(inner) => inner.position.clone(),
            Expr::Var(inner) => inner.position.clone(),
            Expr::If(inner) => inner.position.clone(),
            Expr::Lambda(inner) => inner.position.clone(),
            Expr::App(inner) => inner.position.clone(),
            Expr::Let(inner) => inner.position.clone(),
            Expr::Letrec(inner) => inner.position.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ident {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct NumberLit {
    pub value: i64,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct BooleanLit {
    pub value: bool,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct StringLit {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct Quoted {
    pub datum: Datum,
    pub position: Span,
}

/// Reference to a built-in operator (classified by the parser against the
/// primitive signature table).
#[derive(Debug, Clone)]
pub struct PrimRef {
    pub op: String,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct VarRef {
    pub name: String,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct IfExp {
    pub test: Expr,
    pub then: Expr,
    pub alt: Expr,
    pub position: Span,
}

/// A procedure parameter with its mandatory type annotation.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: Ident,
    pub ty: TypeExp,
}

#[derive(Debug, Clone)]
pub struct LambdaExp {
    pub params: Vec<Param>,
    pub return_ty: TypeExp,
    pub body: Vec<Expr>,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct AppExp {
    pub rator: Expr,
    pub rands: Vec<Expr>,
    pub position: Span,
}

/// A `let` binding: `((name : type) value)`.
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: Ident,
    pub declared: TypeExp,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct LetExp {
    pub bindings: Vec<Binding>,
    pub body: Vec<Expr>,
    pub position: Span,
}

/// A `letrec` binding: `(name value)`. The bound type is derived from the
/// procedure literal's own annotations, so the name carries none.
#[derive(Debug, Clone)]
pub struct LetrecBinding {
    pub name: Ident,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct LetrecExp {
    pub bindings: Vec<LetrecBinding>,
    pub body: Vec<Expr>,
    pub position: Span,
}
