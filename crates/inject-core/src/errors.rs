//! Errores del binder.
//!
//! Dos familias separadas:
//! - `ContractViolation`: el llamador del invoker rompió el contrato (lista de
//!   valores con longitud o tipos incorrectos). Es fatal; `PackedInvoker`
//!   sólo lo expone como valor en `try_invoke`.
//! - `BindError`: problemas de integración (registro de interfaces,
//!   configuración) que el contenedor puede reportar a su manera.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ContractViolation {
    #[error("invoker expects {expected} values, received {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("value at position {position} holds `{found}`, parameter expects `{expected}`")]
    TypeMismatch { position: usize, expected: &'static str, found: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BindError {
    #[error("interface `{type_name}` already registered as `{existing}`, refusing `{requested}`")]
    InterfaceConflict { type_name: &'static str, existing: String, requested: String },
    #[error("invalid resolver configuration: {0}")]
    Config(String),
}
