use std::fmt;

/// A symbolic type variable, identified by name. Two variables with
/// different names are never equal; a variable is only ever resolved through
/// an external [`Substitution`](super::subst::Substitution), never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVar {
    pub name: String,
}

impl TypeVar {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExp {
    Number,
    Boolean,
    Str,
    Void,
    Literal,
    Pair(Box<TypeExp>, Box<TypeExp>),
    Proc(Vec<TypeExp>, Box<TypeExp>),
    Var(TypeVar),
}

impl TypeExp {
    pub fn pair(first: TypeExp, second: TypeExp) -> Self {
        TypeExp::Pair(Box::new(first), Box::new(second))
    }

    pub fn proc(params: Vec<TypeExp>, result: TypeExp) -> Self {
        TypeExp::Proc(params, Box::new(result))
    }

    pub fn pretty(&self) -> String {
        match self {
            TypeExp::Number => "number".to_string(),
            TypeExp::Boolean => "boolean".to_string(),
            TypeExp::Str => "string".to_string(),
            TypeExp::Void => "void".to_string(),
            TypeExp::Literal => "literal".to_string(),
            TypeExp::Pair(first, second) => {
                format!("(pair {} {})", first.pretty(), second.pretty())
            }
            TypeExp::Proc(params, result) => {
                if params.is_empty() {
                    format!("(Empty -> {})", result.pretty())
                } else {
                    let params = params
                        .iter()
                        .map(TypeExp::pretty)
                        .collect::<Vec<_>>()
                        .join(" * ");
                    format!("({} -> {})", params, result.pretty())
                }
            }
            TypeExp::Var(var) => var.name.clone(),
        }
    }
}

impl fmt::Display for TypeExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

/// Mints fresh, never-repeating type-variable names. Each signature-table
/// lookup for a generic operator takes fresh variables from here so that
/// unification results cannot leak between unrelated call sites.
#[derive(Debug, Default)]
pub struct VarGen {
    next: usize,
}

impl VarGen {
    pub fn new() -> Self {
        VarGen { next: 0 }
    }

    pub fn fresh(&mut self) -> TypeExp {
        self.next += 1;
        TypeExp::Var(TypeVar::new(format!("T{}", self.next)))
    }
}
