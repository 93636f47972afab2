//! # Type Error Definitions
//!
//! Every failure the typing engine can produce is a variant here. Failures
//! are terminal for the checked subtree: each rule either returns a type or
//! one of these, and the error propagates unchanged to the entry point.
//!
//! Messages embed the pretty-printed forms of the types involved and, where
//! it helps, the printed form of the offending expression. When a source
//! span with attached source text is available, `Display` renders the
//! message through the span for location context, as the rest of the
//! pipeline's errors do.

use std::fmt;

use lachs::Span;

use super::ty::TypeExp;

/// Type error encountered while checking an expression or program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Reference to a name absent from the whole environment chain.
    UnboundVariable { name: String, span: Span },

    /// Two computed types disagree where equality was required.
    TypeMismatch {
        expected: TypeExp,
        found: TypeExp,
        /// Printed form of the expression being checked.
        context: String,
        span: Span,
    },

    /// An application's argument count differs from the operator's
    /// parameter count.
    ArityMismatch {
        expected: usize,
        found: usize,
        context: String,
        span: Span,
    },

    /// An application whose operator type is not an arrow type.
    NonProcedure {
        found: TypeExp,
        context: String,
        span: Span,
    },

    /// An argument type could not be matched against the corresponding
    /// declared parameter type during an application's unification pass.
    AppMismatch {
        param: TypeExp,
        arg: TypeExp,
        context: String,
        span: Span,
    },

    /// Operator name absent from the primitive signature table.
    UnknownPrimitive { name: String, span: Span },

    /// A `letrec` binding whose value is not a procedure literal.
    MalformedLetrec {
        name: String,
        context: String,
        span: Span,
    },

    /// A body sequence with no expressions.
    EmptyBody { span: Span },
}

impl TypeError {
    pub fn unbound_variable(name: String, span: Span) -> Self {
        TypeError::UnboundVariable { name, span }
    }

    pub fn type_mismatch(expected: TypeExp, found: TypeExp, context: String, span: Span) -> Self {
        TypeError::TypeMismatch {
            expected,
            found,
            context,
            span,
        }
    }

    pub fn arity_mismatch(expected: usize, found: usize, context: String, span: Span) -> Self {
        TypeError::ArityMismatch {
            expected,
            found,
            context,
            span,
        }
    }

    pub fn non_procedure(found: TypeExp, context: String, span: Span) -> Self {
        TypeError::NonProcedure {
            found,
            context,
            span,
        }
    }

    pub fn app_mismatch(param: TypeExp, arg: TypeExp, context: String, span: Span) -> Self {
        TypeError::AppMismatch {
            param,
            arg,
            context,
            span,
        }
    }

    pub fn unknown_primitive(name: String, span: Span) -> Self {
        TypeError::UnknownPrimitive { name, span }
    }

    pub fn malformed_letrec(name: String, context: String, span: Span) -> Self {
        TypeError::MalformedLetrec {
            name,
            context,
            span,
        }
    }

    pub fn empty_body(span: Span) -> Self {
        TypeError::EmptyBody { span }
    }

    fn message(&self) -> String {
        match self {
            TypeError::UnboundVariable { name, .. } => {
                format!("unbound variable: {}", name)
            }
            TypeError::TypeMismatch {
                expected,
                found,
                context,
                ..
            } => format!(
                "type mismatch: expected {}, found {} in {}",
                expected.pretty(),
                found.pretty(),
                context
            ),
            TypeError::ArityMismatch {
                expected,
                found,
                context,
                ..
            } => format!(
                "arity mismatch: expected {} argument(s), found {} in {}",
                expected, found, context
            ),
            TypeError::NonProcedure { found, context, .. } => format!(
                "application of non-procedure: operator has type {} in {}",
                found.pretty(),
                context
            ),
            TypeError::AppMismatch {
                param,
                arg,
                context,
                ..
            } => format!(
                "type mismatch in application: expected {}, found {} in {}",
                param.pretty(),
                arg.pretty(),
                context
            ),
            TypeError::UnknownPrimitive { name, .. } => {
                format!("unimplemented primitive: {}", name)
            }
            TypeError::MalformedLetrec { name, context, .. } => format!(
                "letrec binding '{}' is not a procedure literal in {}",
                name, context
            ),
            TypeError::EmptyBody { .. } => "empty body sequence".to_string(),
        }
    }

    fn span(&self) -> &Span {
        match self {
            TypeError::UnboundVariable { span, .. }
            | TypeError::TypeMismatch { span, .. }
            | TypeError::ArityMismatch { span, .. }
            | TypeError::NonProcedure { span, .. }
            | TypeError::AppMismatch { span, .. }
            | TypeError::UnknownPrimitive { span, .. }
            | TypeError::MalformedLetrec { span, .. }
            | TypeError::EmptyBody { span } => span,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = self.message();
        let span = self.span();
        if span.source.is_empty() {
            write!(f, "Type error: {}", msg)
        } else {
            write!(f, "{}", span.to_string(&msg))
        }
    }
}

impl std::error::Error for TypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = TypeError::type_mismatch(
            TypeExp::Boolean,
            TypeExp::Number,
            "(if 1 2 3)".to_string(),
            Span::default(),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("type mismatch"));
        assert!(msg.contains("boolean"));
        assert!(msg.contains("number"));
        assert!(msg.contains("(if 1 2 3)"));
    }

    #[test]
    fn test_unknown_primitive_display() {
        let err = TypeError::unknown_primitive("frob".to_string(), Span::default());
        assert!(format!("{}", err).contains("unimplemented primitive: frob"));
    }

    #[test]
    fn test_arity_mismatch_display() {
        let err = TypeError::arity_mismatch(1, 2, "(f 1 2)".to_string(), Span::default());
        let msg = format!("{}", err);
        assert!(msg.contains("arity mismatch"));
        assert!(msg.contains("(f 1 2)"));
    }
}
