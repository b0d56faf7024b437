//! Unification: structural matching of terms with occurs check.

mod substitution;
mod unify;

pub use substitution::Substitution;
pub use unify::{occurs_check, unify, unify_many, unify_var, UnifyFailure, UnifyResult};
