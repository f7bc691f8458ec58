//! Listas de parámetros a nivel de tipos.
//!
//! Una firma `(A, B, C)` se representa como la lista encadenada
//! `(A, (B, (C, ())))`. `ParamList` se implementa de forma recursiva sobre
//! esa forma: el caso base `()` y el caso `(Cabeza, Resto)`. Todas las
//! operaciones recorren la lista en orden de declaración.

use std::any::type_name;

use super::ParamDescriptor;
use crate::capability::{Injectable, ObjectFamily, Variant};
use crate::errors::ContractViolation;
use crate::identifier::{Identifier, IdentifierResolver};

/// Lista de parámetros inyectables conocida en compilación.
pub trait ParamList: Sized + Send + Sync + 'static {
    /// Número de parámetros.
    const LEN: usize;

    /// Añade a `out` un identificador por parámetro, en orden.
    fn push_identifiers(resolver: &IdentifierResolver, out: &mut Vec<Identifier>);

    /// Añade a `out` un descriptor por parámetro, en orden.
    fn push_descriptors(out: &mut Vec<ParamDescriptor>);

    /// Convierte `values[position..]` a los tipos estáticos de la lista.
    ///
    /// La longitud total la comprueba el invoker antes de llamar aquí.
    fn extract(values: &[Variant], position: usize) -> Result<Self, ContractViolation>;
}

impl ParamList for () {
    const LEN: usize = 0;

    fn push_identifiers(_resolver: &IdentifierResolver, _out: &mut Vec<Identifier>) {}

    fn push_descriptors(_out: &mut Vec<ParamDescriptor>) {}

    fn extract(values: &[Variant], position: usize) -> Result<Self, ContractViolation> {
        if position != values.len() {
            return Err(ContractViolation::ArityMismatch { expected: position,
                                                          found: values.len() });
        }
        Ok(())
    }
}

impl<H: Injectable, T: ParamList> ParamList for (H, T) {
    const LEN: usize = 1 + T::LEN;

    fn push_identifiers(resolver: &IdentifierResolver, out: &mut Vec<Identifier>) {
        out.push(resolver.resolve::<H>());
        T::push_identifiers(resolver, out);
    }

    fn push_descriptors(out: &mut Vec<ParamDescriptor>) {
        out.push(ParamDescriptor { position: out.len(),
                                   type_name: type_name::<H>(),
                                   class_name: <H::Object as ObjectFamily>::CLASS_NAME });
        T::push_descriptors(out);
    }

    fn extract(values: &[Variant], position: usize) -> Result<Self, ContractViolation> {
        let value = values.get(position)
                          .ok_or(ContractViolation::ArityMismatch { expected: position + Self::LEN,
                                                                    found: values.len() })?;
        let head = H::from_variant(value).ok_or_else(|| ContractViolation::TypeMismatch { position,
                                                                                          expected: type_name::<H>(),
                                                                                          found: value.type_name() })?;
        Ok((head, T::extract(values, position + 1)?))
    }
}

/// Construye el tipo (o el patrón) de lista encadenada para unos
/// identificadores: `param_list!(A, B)` -> `(A, (B, ()))`.
#[macro_export]
#[doc(hidden)]
macro_rules! param_list {
    () => { () };
    ($head:ident $(, $tail:ident)*) => { ($head, $crate::param_list!($($tail),*)) };
}
