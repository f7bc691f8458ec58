//! Errores del contenedor.
//!
//! Los fallos de resolución son recuperables y se reportan como valores. Las
//! violaciones de contrato del invoker no pasan por aquí: siguen siendo
//! fatales.

use inject_core::{BindError, Identifier};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ContainerError {
    #[error("no provider registered for `{0}`")]
    NotRegistered(Identifier),
    #[error("dependency cycle: {}", format_chain(.0))]
    Cycle(Vec<Identifier>),
    #[error("`{identifier}` provides `{found}`, requested `{expected}`")]
    TypeCollision { identifier: Identifier, expected: &'static str, found: &'static str },
    #[error(transparent)]
    Bind(#[from] BindError),
}

fn format_chain(chain: &[Identifier]) -> String {
    chain.iter().map(Identifier::as_str).collect::<Vec<_>>().join(" -> ")
}
