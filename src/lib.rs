//! # Tysp - A Static Type Checker for an Explicitly-Typed Scheme Dialect
//!
//! Tysp checks a small functional language with s-expression syntax in which
//! every binding site carries a type annotation. There is no inference of
//! binding types and no polymorphic generalization: the checker computes the
//! type of each expression bottom-up and demands equality wherever two types
//! must agree.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → AST (a form or a program)
//!     ↓
//! [Type Checker] → Type (printed as concrete type syntax)
//! ```
//!
//! ## The Language
//!
//! Expressions are number, boolean, and string literals, quoted data,
//! variables, primitives, and the compound forms `if`, `lambda`, `let`,
//! `letrec`, and application. A program is `(program <form> ...)` where each
//! form is either an expression or `(define (name : type) value)`.
//!
//! Types are the atomics `number`, `boolean`, `string`, `void`, and
//! `literal`, pair types `(pair T T)`, and arrow types `(T * ... -> T)`
//! (nullary arrows spell their empty parameter list `Empty`).
//!
//! ## Key Design Decisions
//!
//! ### Equality Checking with Local Unification
//! Most rules compare computed types structurally. Only application sites
//! unify: primitive signatures such as `number?`'s `(T1 -> boolean)` carry
//! fresh type variables, and each call site resolves them in a substitution
//! local to that call. The unifier is deliberately shallow - it binds and
//! checks variables at the top level and one level under `pair`, while arrow
//! types compare by plain equality.
//!
//! ### Annotation-Driven Recursion
//! `letrec` bindings must be procedure literals. Their arrow types are read
//! off the annotations alone, so mutually recursive procedures can enter
//! scope before any body is checked.
//!
//! ## Getting Started
//!
//! Use [`type_of_expression`] for a single form or [`type_of_program`] for a
//! `(program ...)` source; both return the printed type.

pub mod ast;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod types;

pub use types::{CheckError, type_of_expression, type_of_program};
