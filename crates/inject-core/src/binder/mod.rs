//! Binder de parámetros / empaquetador de funciones.
//!
//! `ParameterBinder::pack` toma un callable tipado y devuelve:
//! - los `Identifier` de sus parámetros, en orden de declaración;
//! - la `Signature` (descriptores de cada parámetro);
//! - un `PackedInvoker` que acepta `&[Variant]` de la misma longitud.
//!
//! La firma se descompone en compilación (`ParamList` sobre listas
//! encadenadas de tipos); un callable con un parámetro no inyectable no
//! compila.

mod invoker;
mod packable;
mod param_list;
mod signature;

use log::debug;

use crate::identifier::{Identifier, IdentifierResolver};

pub use invoker::PackedInvoker;
pub use packable::Packable;
pub use param_list::ParamList;
pub use signature::{ParamDescriptor, Signature};

/// Resultado de empaquetar un callable.
#[derive(Debug)]
pub struct Packed<R> {
    identifiers: Vec<Identifier>,
    signature: Signature,
    invoker: PackedInvoker<R>,
}

impl<R> Packed<R> {
    /// Identificadores, uno por parámetro, en orden.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn invoker(&self) -> &PackedInvoker<R> {
        &self.invoker
    }

    /// Hash blake3 (hex) de la secuencia de identificadores. Dos callables
    /// con la misma secuencia de parámetros comparten fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for id in &self.identifiers {
            // prefijo de longitud: ["ab", "c"] y ["a", "bc"] no colisionan
            hasher.update(&(id.as_str().len() as u64).to_le_bytes());
            hasher.update(id.as_str().as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    pub fn into_parts(self) -> (Vec<Identifier>, PackedInvoker<R>) {
        (self.identifiers, self.invoker)
    }
}

impl<R> Clone for Packed<R> {
    fn clone(&self) -> Self {
        Self { identifiers: self.identifiers.clone(),
               signature: self.signature.clone(),
               invoker: self.invoker.clone() }
    }
}

/// Binder: posee el resolver con el que nombra las dependencias.
#[derive(Debug, Clone)]
pub struct ParameterBinder {
    resolver: IdentifierResolver,
}

impl ParameterBinder {
    pub fn new(resolver: IdentifierResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &IdentifierResolver {
        &self.resolver
    }

    /// Empaqueta `callable`. Sólo lee el registro de interfaces.
    ///
    /// Los closures necesitan los tipos de sus parámetros anotados. Un
    /// parámetro que no sea `Arc<T: ObjectFamily>` se rechaza al compilar:
    ///
    /// ```compile_fail
    /// use std::sync::Arc;
    /// use inject_core::{IdentifierResolver, NoInterfaces, ParameterBinder, ResolverConfig};
    ///
    /// let binder = ParameterBinder::new(IdentifierResolver::new(ResolverConfig::default(), Arc::new(NoInterfaces)));
    /// binder.pack(|port: u16| port);
    /// ```
    ///
    /// Tampoco un `Arc` a un tipo fuera de la familia de objetos:
    ///
    /// ```compile_fail
    /// use std::sync::Arc;
    /// use inject_core::{IdentifierResolver, NoInterfaces, ParameterBinder, ResolverConfig};
    ///
    /// let binder = ParameterBinder::new(IdentifierResolver::new(ResolverConfig::default(), Arc::new(NoInterfaces)));
    /// binder.pack(|name: Arc<String>| name.len());
    /// ```
    pub fn pack<F, Args>(&self, callable: F) -> Packed<F::Output>
        where F: Packable<Args>,
              Args: ParamList,
              F::Output: 'static
    {
        let identifiers = self.identifiers_of::<Args>();
        let signature = Self::signature_of::<Args>();
        debug!("packed {} ({} params): [{}]",
               std::any::type_name::<F>(),
               Args::LEN,
               identifiers.iter().map(Identifier::as_str).collect::<Vec<_>>().join(", "));
        Packed { identifiers,
                 signature,
                 invoker: PackedInvoker::new::<F, Args>(callable) }
    }

    /// Identificadores de una lista de parámetros sin empaquetar nada.
    pub fn identifiers_of<Args: ParamList>(&self) -> Vec<Identifier> {
        let mut out = Vec::with_capacity(Args::LEN);
        Args::push_identifiers(&self.resolver, &mut out);
        out
    }

    pub fn signature_of<Args: ParamList>() -> Signature {
        let mut params = Vec::with_capacity(Args::LEN);
        Args::push_descriptors(&mut params);
        Signature::new(params)
    }
}
