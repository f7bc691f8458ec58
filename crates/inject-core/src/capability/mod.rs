//! Clasificador de capacidad: qué tipos de parámetro son inyectables.
//!
//! La familia de objetos inyectables la forman los tipos que implementan
//! `ObjectFamily` (servicios concretos y `dyn Interface`). Un parámetro es
//! inyectable si y sólo si es un `Arc<T>` con `T` en esa familia. Todo lo
//! demás se rechaza en compilación: no existe rama de runtime para el caso
//! "no inyectable".

pub mod macros;
mod object;
mod variant;

pub use object::{is_injectable, Implements, Injectable, ObjectFamily};
pub use variant::Variant;
