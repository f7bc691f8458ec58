//! mvvm-inject
//!
//! Contenedor de demostración sobre `inject-core`:
//! - `container`: registra instancias y factories empaquetadas por
//!   identificador y resuelve grafos de dependencias.
//! - `errors`: errores recuperables del contenedor.
//! - `demo`: servicios de ejemplo (estilo view-model) usados por el binario
//!   `inject-demo` y los tests de integración.

pub mod container;
pub mod demo;
pub mod errors;

pub use container::ServiceContainer;
pub use errors::ContainerError;
