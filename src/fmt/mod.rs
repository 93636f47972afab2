//! Pretty-printing back to canonical concrete syntax.
//!
//! Diagnostics embed these printed forms, so every AST node renders to a
//! single-line s-expression.

use std::fmt::{self, Display};

use crate::ast::datum::Datum;
use crate::ast::expression::{
    AppExp, Binding, Expr, IfExp, LambdaExp, LetExp, LetrecBinding, LetrecExp, Param,
};
use crate::ast::{Define, Form, Program};

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n.value),
            Expr::Boolean(b) => write!(f, "{}", if b.value { "#t" } else { "#f" }),
            Expr::Str(s) => write!(f, "\"{}\"", s.value),
            Expr::Quoted(q) => write!(f, "'{}", q.datum),
            Expr::Prim(p) => write!(f, "{}", p.op),
            Expr::Var(v) => write!(f, "{}", v.name),
            Expr::If(inner) => write!(f, "{}", inner),
            Expr::Lambda(inner) => write!(f, "{}", inner),
            Expr::App(inner) => write!(f, "{}", inner),
            Expr::Let(inner) => write!(f, "{}", inner),
            Expr::Letrec(inner) => write!(f, "{}", inner),
        }
    }
}

impl Display for IfExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(if {} {} {})", self.test, self.then, self.alt)
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} : {})", self.name.value, self.ty)
    }
}

impl Display for LambdaExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(lambda (")?;
        write_separated(f, &self.params)?;
        write!(f, ") : {}", self.return_ty)?;
        for expr in &self.body {
            write!(f, " {}", expr)?;
        }
        write!(f, ")")
    }
}

impl Display for AppExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}", self.rator)?;
        for rand in &self.rands {
            write!(f, " {}", rand)?;
        }
        write!(f, ")")
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(({} : {}) {})",
            self.name.value, self.declared, self.value
        )
    }
}

impl Display for LetExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(let (")?;
        write_separated(f, &self.bindings)?;
        write!(f, ")")?;
        for expr in &self.body {
            write!(f, " {}", expr)?;
        }
        write!(f, ")")
    }
}

impl Display for LetrecBinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {})", self.name.value, self.value)
    }
}

impl Display for LetrecExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(letrec (")?;
        write_separated(f, &self.bindings)?;
        write!(f, ")")?;
        for expr in &self.body {
            write!(f, " {}", expr)?;
        }
        write!(f, ")")
    }
}

impl Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(define ({} : {}) {})",
            self.name.value, self.declared, self.value
        )
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Form::Define(def) => write!(f, "{}", def),
            Form::Exp(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(program")?;
        for form in &self.forms {
            write!(f, " {}", form)?;
        }
        write!(f, ")")
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Datum::Number(n) => write!(f, "{}", n),
            Datum::Boolean(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
            Datum::Str(s) => write!(f, "\"{}\"", s),
            Datum::Symbol(s) => write!(f, "{}", s),
            Datum::EmptyList => write!(f, "()"),
            Datum::Pair(first, second) => {
                // Proper lists print as (a b c), improper tails as (a . b).
                write!(f, "({}", first)?;
                let mut rest = second;
                loop {
                    match rest.as_ref() {
                        Datum::Pair(head, tail) => {
                            write!(f, " {}", head)?;
                            rest = tail;
                        }
                        Datum::EmptyList => break,
                        other => {
                            write!(f, " . {}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

fn write_separated<T: Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_proper_list() {
        let datum = Datum::pair(
            Datum::Number(1),
            Datum::pair(Datum::Number(2), Datum::EmptyList),
        );
        assert_eq!(datum.to_string(), "(1 2)");
    }

    #[test]
    fn test_datum_dotted_pair() {
        let datum = Datum::pair(Datum::Number(1), Datum::Number(2));
        assert_eq!(datum.to_string(), "(1 . 2)");
    }

    #[test]
    fn test_datum_leaves() {
        assert_eq!(Datum::Boolean(true).to_string(), "#t");
        assert_eq!(Datum::Symbol("abc".to_string()).to_string(), "abc");
        assert_eq!(Datum::EmptyList.to_string(), "()");
    }
}
