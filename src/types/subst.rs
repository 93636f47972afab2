use std::collections::HashMap;

use super::ty::{TypeExp, TypeVar};

/// Call-local bindings from type-variable to concrete type.
///
/// One of these is allocated fresh for each function-application site,
/// populated during that application's unification pass, used once to
/// concretize the operator's result type, and then dropped. It is never
/// shared or merged across applications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution(HashMap<TypeVar, TypeExp>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(HashMap::new())
    }

    pub fn bind(&mut self, var: TypeVar, ty: TypeExp) {
        self.0.insert(var, ty);
    }

    pub fn lookup(&self, var: &TypeVar) -> Option<&TypeExp> {
        self.0.get(var)
    }

    /// Rewrite `ty`, replacing every variable bound in this substitution and
    /// leaving unbound variables untouched.
    pub fn apply(&self, ty: &TypeExp) -> TypeExp {
        match ty {
            TypeExp::Number
            | TypeExp::Boolean
            | TypeExp::Str
            | TypeExp::Void
            | TypeExp::Literal => ty.clone(),
            TypeExp::Var(var) => self.0.get(var).cloned().unwrap_or_else(|| ty.clone()),
            TypeExp::Pair(first, second) => {
                TypeExp::pair(self.apply(first), self.apply(second))
            }
            TypeExp::Proc(params, result) => TypeExp::proc(
                params.iter().map(|p| self.apply(p)).collect(),
                self.apply(result),
            ),
        }
    }
}
