use super::ty::{TypeExp, VarGen};

/// Operator names known to the signature table. The parser uses this list to
/// classify identifiers as primitive references.
pub const PRIMITIVES: &[&str] = &[
    "+", "-", "*", "/", ">", "<", "=", "and", "or", "not", "number?", "boolean?", "string?",
    "list?", "pair?", "symbol?", "eq?", "string=?", "display", "newline", "cons", "car", "cdr",
];

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Look up the type signature of a built-in operator, or `None` for an
/// unknown name.
///
/// Generic signatures mint fresh, distinct variable names from `vars` on
/// every lookup. Reusing one cached variable across call sites would let
/// unification results from one application leak into an unrelated one, so
/// freshness here is a required invariant.
pub fn primitive_signature(op: &str, vars: &mut VarGen) -> Option<TypeExp> {
    use TypeExp::{Boolean, Number, Void};

    let sig = match op {
        "+" | "-" | "*" | "/" => TypeExp::proc(vec![Number, Number], Number),
        ">" | "<" | "=" => TypeExp::proc(vec![Number, Number], Boolean),
        "and" | "or" => TypeExp::proc(vec![Boolean, Boolean], Boolean),
        "not" => TypeExp::proc(vec![Boolean], Boolean),
        "number?" | "boolean?" | "string?" | "list?" | "pair?" | "symbol?" => {
            TypeExp::proc(vec![vars.fresh()], Boolean)
        }
        "eq?" | "string=?" => TypeExp::proc(vec![vars.fresh(), vars.fresh()], Boolean),
        "display" => TypeExp::proc(vec![vars.fresh()], Void),
        "newline" => TypeExp::proc(vec![], Void),
        "cons" => {
            let first = vars.fresh();
            let second = vars.fresh();
            TypeExp::proc(
                vec![first.clone(), second.clone()],
                TypeExp::pair(first, second),
            )
        }
        "car" => {
            let first = vars.fresh();
            let second = vars.fresh();
            TypeExp::proc(vec![TypeExp::pair(first.clone(), second)], first)
        }
        "cdr" => {
            let first = vars.fresh();
            let second = vars.fresh();
            TypeExp::proc(vec![TypeExp::pair(first, second.clone())], second)
        }
        _ => return None,
    };
    Some(sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_signature() {
        let mut vars = VarGen::new();
        let sig = primitive_signature("+", &mut vars).unwrap();
        assert_eq!(
            sig,
            TypeExp::proc(vec![TypeExp::Number, TypeExp::Number], TypeExp::Number)
        );
    }

    #[test]
    fn test_comparison_signature() {
        let mut vars = VarGen::new();
        let sig = primitive_signature("<", &mut vars).unwrap();
        assert_eq!(
            sig,
            TypeExp::proc(vec![TypeExp::Number, TypeExp::Number], TypeExp::Boolean)
        );
    }

    #[test]
    fn test_predicate_mints_fresh_var_per_lookup() {
        let mut vars = VarGen::new();
        let first = primitive_signature("number?", &mut vars).unwrap();
        let second = primitive_signature("number?", &mut vars).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_equality_predicate_has_independent_params() {
        let mut vars = VarGen::new();
        let sig = primitive_signature("eq?", &mut vars).unwrap();
        match sig {
            TypeExp::Proc(params, _) => {
                assert_eq!(params.len(), 2);
                assert_ne!(params[0], params[1]);
            }
            other => panic!("expected arrow type, got {}", other),
        }
    }

    #[test]
    fn test_cons_relates_params_to_result() {
        let mut vars = VarGen::new();
        let sig = primitive_signature("cons", &mut vars).unwrap();
        match sig {
            TypeExp::Proc(params, result) => {
                assert_eq!(*result, TypeExp::pair(params[0].clone(), params[1].clone()));
            }
            other => panic!("expected arrow type, got {}", other),
        }
    }

    #[test]
    fn test_newline_is_nullary() {
        let mut vars = VarGen::new();
        let sig = primitive_signature("newline", &mut vars).unwrap();
        assert_eq!(sig, TypeExp::proc(vec![], TypeExp::Void));
    }

    #[test]
    fn test_unknown_operator() {
        let mut vars = VarGen::new();
        assert!(primitive_signature("frobnicate", &mut vars).is_none());
    }

    #[test]
    fn test_is_primitive_matches_table() {
        for op in PRIMITIVES {
            assert!(is_primitive(op));
            let mut vars = VarGen::new();
            assert!(primitive_signature(op, &mut vars).is_some(), "{op}");
        }
        assert!(!is_primitive("lambda"));
    }
}
