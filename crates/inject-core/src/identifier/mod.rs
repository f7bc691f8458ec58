//! Resolución de identificadores de dependencias.
//!
//! Búsqueda en dos niveles: primero el identificador de interfaz registrado
//! para el tipo exacto, si no existe se sintetiza `prefijo + nombre`.

mod registry;
mod resolver;
mod types;

pub use registry::{InterfaceLookup, InterfaceRegistry, NoInterfaces};
pub use resolver::IdentifierResolver;
pub use types::Identifier;
