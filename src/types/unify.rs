use super::subst::Substitution;
use super::ty::TypeExp;

/// Match a (possibly generic) expected parameter type against the actual
/// argument type, recording type-variable bindings in `subst`.
///
/// This is deliberately *not* a full unifier:
///
/// - Only the expected side may contain variables; they come exclusively
///   from freshly instantiated primitive signatures.
/// - A variable that is already bound must see a structurally equal actual
///   type; it is never re-bound.
/// - Pair types unify component-wise (first with first, second with second).
/// - Everything else, *including arrow against arrow*, falls back to plain
///   structural equality. There is no unification through a procedure type's
///   parameter or result positions, and no occurs-check.
///
/// That is sufficient for the shallow generic signatures in the primitive
/// table, where variables only ever appear at the top level of a parameter
/// or directly under a `pair` constructor. Extending the table with
/// higher-order generic primitives would require revisiting this.
///
/// # Examples
///
/// ```text
/// unify(T1, number, {})            = true,  {T1 := number}
/// unify(T1, boolean, {T1: number}) = false
/// unify((pair T1 T2), (pair number boolean), {})
///                                  = true,  {T1 := number, T2 := boolean}
/// unify(number, boolean, {})       = false
/// unify((number -> number), (number -> number), {}) = true (plain equality)
/// ```
pub fn unify(expected: &TypeExp, actual: &TypeExp, subst: &mut Substitution) -> bool {
    match (expected, actual) {
        (TypeExp::Var(var), _) => {
            if let Some(bound) = subst.lookup(var) {
                return bound == actual;
            }
            subst.bind(var.clone(), actual.clone());
            true
        }
        (TypeExp::Pair(e1, e2), TypeExp::Pair(a1, a2)) => {
            unify(e1, a1, subst) && unify(e2, a2, subst)
        }
        // Atomic types, arrow types and mismatched shapes: structural equality.
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ty::TypeVar;

    fn tvar(name: &str) -> TypeExp {
        TypeExp::Var(TypeVar::new(name))
    }

    #[test]
    fn test_unify_identical_atomics() {
        let mut subst = Substitution::empty();
        assert!(unify(&TypeExp::Number, &TypeExp::Number, &mut subst));
        assert!(unify(&TypeExp::Boolean, &TypeExp::Boolean, &mut subst));
        assert!(unify(&TypeExp::Literal, &TypeExp::Literal, &mut subst));
        assert_eq!(subst, Substitution::empty());
    }

    #[test]
    fn test_unify_mismatched_atomics() {
        let mut subst = Substitution::empty();
        assert!(!unify(&TypeExp::Number, &TypeExp::Boolean, &mut subst));
    }

    #[test]
    fn test_unify_binds_fresh_var() {
        let mut subst = Substitution::empty();
        assert!(unify(&tvar("T1"), &TypeExp::Number, &mut subst));
        assert_eq!(subst.lookup(&TypeVar::new("T1")), Some(&TypeExp::Number));
    }

    #[test]
    fn test_unify_bound_var_must_agree() {
        let mut subst = Substitution::empty();
        assert!(unify(&tvar("T1"), &TypeExp::Number, &mut subst));
        assert!(unify(&tvar("T1"), &TypeExp::Number, &mut subst));
        assert!(!unify(&tvar("T1"), &TypeExp::Boolean, &mut subst));
    }

    #[test]
    fn test_unify_pair_componentwise() {
        let mut subst = Substitution::empty();
        let expected = TypeExp::pair(tvar("T1"), tvar("T2"));
        let actual = TypeExp::pair(TypeExp::Number, TypeExp::Boolean);
        assert!(unify(&expected, &actual, &mut subst));
        assert_eq!(subst.lookup(&TypeVar::new("T1")), Some(&TypeExp::Number));
        assert_eq!(subst.lookup(&TypeVar::new("T2")), Some(&TypeExp::Boolean));
    }

    #[test]
    fn test_unify_pair_against_atomic_fails() {
        let mut subst = Substitution::empty();
        let expected = TypeExp::pair(tvar("T1"), tvar("T2"));
        assert!(!unify(&expected, &TypeExp::Number, &mut subst));
    }

    #[test]
    fn test_unify_var_binds_whole_pair() {
        let mut subst = Substitution::empty();
        let actual = TypeExp::pair(TypeExp::Number, TypeExp::Boolean);
        assert!(unify(&tvar("T1"), &actual, &mut subst));
        assert_eq!(subst.lookup(&TypeVar::new("T1")), Some(&actual));
    }

    #[test]
    fn test_unify_arrows_by_equality_only() {
        let mut subst = Substitution::empty();
        let arrow = TypeExp::proc(vec![TypeExp::Number], TypeExp::Number);
        assert!(unify(&arrow, &arrow.clone(), &mut subst));

        // A variable inside an arrow is not resolved: the arrow case is
        // plain structural equality.
        let generic = TypeExp::proc(vec![tvar("T1")], TypeExp::Number);
        assert!(!unify(&generic, &arrow, &mut subst));
    }
}
