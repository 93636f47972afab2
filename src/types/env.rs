use std::collections::HashMap;

use super::ty::TypeExp;

/// An immutable chain of binding frames mapping names to type expressions.
///
/// Every `extend` pushes a whole new frame in front of the chain; frames are
/// never merged or mutated after creation. Lookup walks from the innermost
/// frame outwards. Pushing frames (rather than inserting into an existing
/// one) is what keeps `let` siblings invisible to each other while `letrec`
/// siblings, installed together in one frame, can see each other.
#[derive(Debug, Clone, PartialEq)]
pub struct TEnv {
    bindings: HashMap<String, TypeExp>,
    parent: Option<Box<TEnv>>,
}

impl TEnv {
    pub fn empty() -> Self {
        TEnv {
            bindings: HashMap::new(),
            parent: None,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeExp> {
        self.bindings
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.lookup(name)))
    }

    /// Push one new frame containing all of `bindings` simultaneously.
    pub fn extend(&self, bindings: Vec<(String, TypeExp)>) -> TEnv {
        TEnv {
            bindings: bindings.into_iter().collect(),
            parent: Some(Box::new(self.clone())),
        }
    }
}

impl Default for TEnv {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env() {
        let env = TEnv::empty();
        assert!(env.lookup("x").is_none());
    }

    #[test]
    fn test_extend() {
        let env = TEnv::empty();
        let env = env.extend(vec![("x".to_string(), TypeExp::Number)]);
        assert_eq!(env.lookup("x"), Some(&TypeExp::Number));
    }

    #[test]
    fn test_inner_frame_shadows_outer() {
        let env = TEnv::empty();
        let env = env.extend(vec![("x".to_string(), TypeExp::Number)]);
        let env = env.extend(vec![("x".to_string(), TypeExp::Boolean)]);
        assert_eq!(env.lookup("x"), Some(&TypeExp::Boolean));
    }

    #[test]
    fn test_outer_frame_still_visible() {
        let env = TEnv::empty();
        let env = env.extend(vec![("x".to_string(), TypeExp::Number)]);
        let env = env.extend(vec![("y".to_string(), TypeExp::Boolean)]);
        assert_eq!(env.lookup("x"), Some(&TypeExp::Number));
        assert_eq!(env.lookup("y"), Some(&TypeExp::Boolean));
    }

    #[test]
    fn test_extend_does_not_mutate_parent() {
        let parent = TEnv::empty().extend(vec![("x".to_string(), TypeExp::Number)]);
        let _child = parent.extend(vec![("y".to_string(), TypeExp::Boolean)]);
        assert!(parent.lookup("y").is_none());
    }

    #[test]
    fn test_one_frame_binds_simultaneously() {
        let env = TEnv::empty().extend(vec![
            ("f".to_string(), TypeExp::proc(vec![TypeExp::Number], TypeExp::Number)),
            ("g".to_string(), TypeExp::proc(vec![TypeExp::Number], TypeExp::Boolean)),
        ]);
        assert!(env.lookup("f").is_some());
        assert!(env.lookup("g").is_some());
    }
}
