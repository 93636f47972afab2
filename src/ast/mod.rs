use lachs::Span;

pub mod datum;
pub mod expression;

use expression::{Expr, Ident};

use crate::types::ty::TypeExp;

/// An ordered sequence of top-level forms.
#[derive(Debug, Clone)]
pub struct Program {
    pub forms: Vec<Form>,
    pub position: Span,
}

/// A top-level form: a declaration or a plain expression.
#[derive(Debug, Clone)]
pub enum Form {
    Define(Define),
    Exp(Expr),
}

/// `(define (name : type) value)`
#[derive(Debug, Clone)]
pub struct Define {
    pub name: Ident,
    pub declared: TypeExp,
    pub value: Expr,
    pub position: Span,
}

/// Output of the parser: a single form or a whole program.
#[derive(Debug, Clone)]
pub enum Parsed {
    Exp(Form),
    Program(Program),
}
