//! Registro de identificadores de interfaz.
//!
//! El registro pertenece al contenedor; el binder sólo lo lee a través de
//! `InterfaceLookup`. `InterfaceRegistry` usa un `DashMap`, así que se puede
//! consultar desde varios hilos mientras otros registran.

use std::any::{type_name, TypeId};
use std::fmt;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use super::Identifier;
use crate::capability::ObjectFamily;
use crate::errors::BindError;

/// Lookup de identificadores de interfaz por tipo exacto de objeto.
pub trait InterfaceLookup: Send + Sync + fmt::Debug {
    /// Identificador registrado para el tipo `object`, si existe.
    fn lookup_identifier(&self, object: TypeId) -> Option<Identifier>;
}

/// Lookup vacío: todos los identificadores se sintetizan.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterfaces;

impl InterfaceLookup for NoInterfaces {
    fn lookup_identifier(&self, _object: TypeId) -> Option<Identifier> {
        None
    }
}

#[derive(Debug, Clone)]
struct InterfaceEntry {
    identifier: Identifier,
    type_name: &'static str,
}

/// Registro concurrente `TypeId -> Identifier`.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    entries: DashMap<TypeId, InterfaceEntry>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra el identificador de interfaz de `I`.
    ///
    /// Registrar dos veces el mismo identificador es idempotente; intentar
    /// cambiarlo devuelve `BindError::InterfaceConflict`.
    pub fn register<I>(&self, identifier: impl Into<Identifier>) -> Result<(), BindError>
        where I: ObjectFamily + ?Sized
    {
        let identifier = identifier.into();
        match self.entries.entry(TypeId::of::<I>()) {
            Entry::Occupied(existing) => {
                let existing = existing.get();
                if existing.identifier == identifier {
                    return Ok(());
                }
                Err(BindError::InterfaceConflict { type_name: existing.type_name,
                                                   existing: existing.identifier.to_string(),
                                                   requested: identifier.into_string() })
            }
            Entry::Vacant(slot) => {
                debug!("interface {} registered as {}", type_name::<I>(), identifier);
                slot.insert(InterfaceEntry { identifier,
                                             type_name: type_name::<I>() });
                Ok(())
            }
        }
    }

    /// Identificador registrado para `I`.
    pub fn interface_identifier<I: ObjectFamily + ?Sized>(&self) -> Option<Identifier> {
        self.lookup_identifier(TypeId::of::<I>())
    }

    /// Elimina el registro de `I` y devuelve el identificador que tenía.
    pub fn unregister<I: ObjectFamily + ?Sized>(&self) -> Option<Identifier> {
        self.entries.remove(&TypeId::of::<I>()).map(|(_, entry)| entry.identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InterfaceLookup for InterfaceRegistry {
    fn lookup_identifier(&self, object: TypeId) -> Option<Identifier> {
        self.entries.get(&object).map(|entry| entry.identifier.clone())
    }
}
