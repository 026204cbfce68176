//! Function resolution for dialect expressions.

use thiserror::Error;

use crate::ast::{Expr, Function};

/// Errors returned when resolving a function call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No function is registered under the given name.
    #[error("no function matches the name {name:?}")]
    Unknown {
        /// The unresolved function name.
        name: String,
    },

    /// The function exists but was called with the wrong number of
    /// arguments.
    #[error("{name}() takes {expected} argument(s), not {got}")]
    WrongArity {
        /// The function name.
        name: String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments supplied.
        got: usize,
    },
}

/// Resolves function names and argument lists to expression nodes.
///
/// The parser calls this for every `name(...)` form it encounters; the
/// statement layer can supply its own implementation to extend the
/// function set.
pub trait FunctionResolver {
    /// Resolves a call to `name` with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] for unknown names or arity mismatches.
    fn resolve(&self, name: &str, args: Vec<Expr>) -> Result<Expr, ResolveError>;
}

/// The built-in function registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionRegistry;

impl FunctionResolver for FunctionRegistry {
    fn resolve(&self, name: &str, args: Vec<Expr>) -> Result<Expr, ResolveError> {
        match name {
            "pk" => {
                if !args.is_empty() {
                    return Err(ResolveError::WrongArity {
                        name: String::from("pk"),
                        expected: 0,
                        got: args.len(),
                    });
                }
                Ok(Expr::Function(Function::Pk))
            }
            _ => Err(ResolveError::Unknown {
                name: String::from(name),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pk() {
        let expr = FunctionRegistry.resolve("pk", Vec::new()).unwrap();
        assert_eq!(expr, Expr::Function(Function::Pk));
    }

    #[test]
    fn test_pk_rejects_arguments() {
        let err = FunctionRegistry
            .resolve("pk", vec![Expr::integer(1)])
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::WrongArity {
                name: String::from("pk"),
                expected: 0,
                got: 1,
            }
        );
    }

    #[test]
    fn test_unknown_function() {
        let err = FunctionRegistry.resolve("nope", Vec::new()).unwrap_err();
        assert!(matches!(err, ResolveError::Unknown { name } if name == "nope"));
    }
}
