use std::any::{type_name, TypeId};
use std::sync::Arc;

use log::trace;

use super::{Identifier, InterfaceLookup};
use crate::capability::{Injectable, ObjectFamily};
use crate::config::{IdentifierStyle, ResolverConfig};

/// Resolver de identificadores.
///
/// Es una función pura del tipo, de su configuración y del lookup externo;
/// no muta nada. Clonarlo comparte el lookup.
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    config: ResolverConfig,
    lookup: Arc<dyn InterfaceLookup>,
}

impl IdentifierResolver {
    pub fn new(config: ResolverConfig, lookup: Arc<dyn InterfaceLookup>) -> Self {
        Self { config, lookup }
    }

    /// Identificador de la dependencia que produce un parámetro `T`.
    pub fn resolve<T: Injectable>(&self) -> Identifier {
        self.resolve_object::<T::Object>()
    }

    /// Igual que `resolve` pero partiendo del tipo de objeto apuntado.
    pub fn resolve_object<O: ObjectFamily + ?Sized>(&self) -> Identifier {
        if let Some(iid) = self.lookup.lookup_identifier(TypeId::of::<O>()) {
            trace!("{} -> interface {}", type_name::<O>(), iid);
            return iid;
        }
        let id = self.synthesize::<O>();
        trace!("{} -> synthesized {}", type_name::<O>(), id);
        id
    }

    /// Identificador sintetizado, ignorando el registro de interfaces.
    pub fn synthesize<O: ObjectFamily + ?Sized>(&self) -> Identifier {
        let name = match self.config.style {
            IdentifierStyle::ClassName => O::CLASS_NAME.to_string(),
            IdentifierStyle::QualifiedPath => qualified_name(type_name::<O>()),
        };
        Identifier::new(format!("{}{}", self.config.namespace_prefix, name))
    }
}

/// `dyn app::ports::Log + Send` -> `app.ports.Log`.
fn qualified_name(raw: &str) -> String {
    let raw = raw.strip_prefix("dyn ").unwrap_or(raw);
    let raw = raw.split(" + ").next().unwrap_or(raw);
    raw.replace("::", ".")
}
