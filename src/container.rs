//! `ServiceContainer`: contenedor mínimo que consume el binder.
//!
//! El contenedor decide qué objeto satisface cada identificador; el binder
//! sólo nombra dependencias y da forma a la llamada. Flujo de una factory:
//! 1. `ParameterBinder::pack` devuelve los identificadores y el invoker.
//! 2. Al resolver, el contenedor resuelve cada identificador en orden,
//!    arma la lista de `Variant` y llama al invoker.
//!
//! Las factories son transitorias: cada resolución vuelve a llamarlas. Las
//! instancias registradas se comparten.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use inject_core::{ContractViolation, Identifier, IdentifierResolver, Implements, Injectable, InterfaceRegistry, ObjectFamily, Packable,
                  ParamList, ParameterBinder, ResolverConfig, Variant};
use log::{debug, error, warn};

use crate::errors::ContainerError;

type BuildFn = dyn Fn(&[Variant]) -> Result<Variant, ContainerError> + Send + Sync;

enum Provider {
    Instance(Variant),
    Factory { dependencies: Vec<Identifier>, build: Arc<BuildFn> },
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Instance(v) => f.debug_tuple("Instance").field(v).finish(),
            Provider::Factory { dependencies, .. } => f.debug_struct("Factory").field("dependencies", dependencies).finish(),
        }
    }
}

#[derive(Debug)]
pub struct ServiceContainer {
    registry: Arc<InterfaceRegistry>,
    binder: ParameterBinder,
    providers: IndexMap<Identifier, Provider>,
}

impl ServiceContainer {
    pub fn new(config: ResolverConfig) -> Self {
        let registry = Arc::new(InterfaceRegistry::new());
        let binder = ParameterBinder::new(IdentifierResolver::new(config, registry.clone()));
        Self { registry,
               binder,
               providers: IndexMap::new() }
    }

    pub fn binder(&self) -> &ParameterBinder {
        &self.binder
    }

    /// Registra el identificador de interfaz de `I`. Debe hacerse antes de
    /// registrar providers que dependan de `I`.
    pub fn register_interface<I: ObjectFamily + ?Sized>(&self, identifier: impl Into<Identifier>) -> Result<(), ContainerError> {
        Ok(self.registry.register::<I>(identifier)?)
    }

    /// Registra una instancia compartida bajo el identificador de `T`.
    pub fn add_instance<T: ObjectFamily + ?Sized>(&mut self, object: Arc<T>) -> Identifier {
        let id = self.binder.resolver().resolve_object::<T>();
        self.insert(id.clone(), Provider::Instance(Variant::new(object)));
        id
    }

    /// Registra `service` como implementación de la interfaz `I`.
    pub fn add_service<I, S>(&mut self, service: Arc<S>) -> Identifier
        where I: ObjectFamily + ?Sized,
              S: Implements<I>
    {
        let id = self.binder.resolver().resolve_object::<I>();
        self.insert(id.clone(), Provider::Instance(Variant::of_interface::<I, S>(service)));
        id
    }

    /// Registra una factory tipada; sus parámetros se resuelven por
    /// identificador en cada llamada a `resolve`.
    pub fn add_factory<T, F, Args>(&mut self, factory: F) -> Identifier
        where T: ObjectFamily + ?Sized,
              F: Packable<Args, Output = Arc<T>>,
              Args: ParamList
    {
        let id = self.binder.resolver().resolve_object::<T>();
        let (dependencies, invoker) = self.binder.pack(factory).into_parts();
        let names = dependencies.clone();
        // Un tipo distinto en una posición sólo puede venir de una colisión de
        // identificadores; la longitud la garantiza `resolve_in`.
        let build = move |values: &[Variant]| -> Result<Variant, ContainerError> {
            match invoker.try_invoke(values) {
                Ok(object) => Ok(Variant::new(object)),
                Err(ContractViolation::TypeMismatch { position, expected, found }) => {
                    Err(ContainerError::TypeCollision { identifier: names[position].clone(),
                                                        expected,
                                                        found })
                }
                Err(violation) => {
                    error!("factory contract violation: {violation}");
                    panic!("factory contract violation: {violation}");
                }
            }
        };
        self.insert(id.clone(),
                    Provider::Factory { dependencies,
                                        build: Arc::new(build) });
        id
    }

    /// Identificadores registrados, en orden de registro.
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.providers.keys()
    }

    /// Dependencias declaradas por el provider de `id` (vacío para
    /// instancias).
    pub fn dependencies_of(&self, id: &Identifier) -> Option<&[Identifier]> {
        self.providers.get(id).map(|provider| match provider {
                                  Provider::Instance(_) => &[][..],
                                  Provider::Factory { dependencies, .. } => dependencies.as_slice(),
                              })
    }

    pub fn resolve(&self, id: &Identifier) -> Result<Variant, ContainerError> {
        let mut chain = Vec::new();
        self.resolve_in(id, &mut chain)
    }

    /// Resuelve el valor para un parámetro de tipo `T`.
    pub fn get<T: Injectable>(&self) -> Result<T, ContainerError> {
        let id = self.binder.resolver().resolve::<T>();
        let value = self.resolve(&id)?;
        T::from_variant(&value).ok_or_else(|| ContainerError::TypeCollision { identifier: id,
                                                                              expected: type_name::<T>(),
                                                                              found: value.type_name() })
    }

    fn insert(&mut self, id: Identifier, provider: Provider) {
        if let Some(previous) = self.providers.insert(id.clone(), provider) {
            warn!("provider for {id} replaced (was {previous:?})");
        } else {
            debug!("provider registered for {id}");
        }
    }

    fn resolve_in(&self, id: &Identifier, chain: &mut Vec<Identifier>) -> Result<Variant, ContainerError> {
        if chain.contains(id) {
            let mut cycle = chain.clone();
            cycle.push(id.clone());
            return Err(ContainerError::Cycle(cycle));
        }
        let provider = self.providers
                           .get(id)
                           .ok_or_else(|| ContainerError::NotRegistered(id.clone()))?;
        match provider {
            Provider::Instance(value) => Ok(value.clone()),
            Provider::Factory { dependencies, build } => {
                chain.push(id.clone());
                let values = dependencies.iter()
                                         .map(|dep| self.resolve_in(dep, chain))
                                         .collect::<Result<Vec<_>, _>>()?;
                chain.pop();
                debug!("building {id} from {} dependencies", values.len());
                build(&values)
            }
        }
    }
}
