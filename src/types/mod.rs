pub mod check;
pub mod env;
pub mod error;
pub mod primitives;
pub mod subst;
pub mod ty;
pub mod unify;
pub mod validate;

pub use check::Checker;
pub use env::TEnv;
pub use error::TypeError;
pub use subst::Substitution;
pub use ty::{TypeExp, TypeVar, VarGen};
pub use validate::{CheckError, type_of_expression, type_of_program};
