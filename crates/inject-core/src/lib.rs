//! inject-core: binder de parámetros tipados para inyección de dependencias.
//!
//! Convierte un callable fuertemente tipado (factory/handler con N parámetros
//! `Arc<T>`) en dos artefactos de runtime:
//! - la lista ordenada de `Identifier` que nombra la dependencia de cada
//!   parámetro;
//! - un `PackedInvoker` uniforme que recibe una lista de `Variant`, convierte
//!   cada valor a su tipo estático y llama al callable original.
//!
//! Quién resuelve los identificadores a instancias es asunto del contenedor
//! (externo a este crate).
pub mod binder;
pub mod capability;
pub mod config;
pub mod constants;
pub mod errors;
pub mod identifier;

pub use binder::{Packable, Packed, PackedInvoker, ParamDescriptor, ParamList, ParameterBinder, Signature};
pub use capability::{is_injectable, Implements, Injectable, ObjectFamily, Variant};
pub use config::{IdentifierStyle, ResolverConfig};
pub use errors::{BindError, ContractViolation};
pub use identifier::{Identifier, IdentifierResolver, InterfaceLookup, InterfaceRegistry, NoInterfaces};

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	pub trait Clock: Send + Sync {
		fn now(&self) -> u64;
	}

	#[derive(Debug)]
	pub struct FixedClock(u64);
	impl Clock for FixedClock {
		fn now(&self) -> u64 {
			self.0
		}
	}

	pub struct Greeter {
		clock: Arc<dyn Clock>,
	}

	crate::object_family!(FixedClock);
	crate::object_family!(Greeter);
	crate::object_family!(dyn Clock => "Clock");
	crate::implements!(FixedClock => dyn Clock);

	#[test]
	fn pack_binds_interface_parameter_through_registry() {
		let registry = Arc::new(InterfaceRegistry::new());
		registry.register::<dyn Clock>("app.Clock").expect("register clock");

		let resolver = IdentifierResolver::new(ResolverConfig::with_prefix("app.impl."), registry);
		let binder = ParameterBinder::new(resolver);

		let packed = binder.pack(|clock: Arc<dyn Clock>| Arc::new(Greeter { clock }));
		assert_eq!(packed.identifiers(), &[Identifier::from("app.Clock")]);

		let (_, invoker) = packed.into_parts();
		let clock = Variant::of_interface::<dyn Clock, _>(Arc::new(FixedClock(42)));
		let greeter = invoker.invoke(&[clock]);
		assert_eq!(greeter.clock.now(), 42);
	}

	#[test]
	fn concrete_parameter_falls_back_to_class_name() {
		let resolver = IdentifierResolver::new(ResolverConfig::with_prefix("app.impl."), Arc::new(NoInterfaces));
		let binder = ParameterBinder::new(resolver);

		let packed = binder.pack(|clock: Arc<FixedClock>| clock.now());
		assert_eq!(packed.identifiers(), &[Identifier::from("app.impl.FixedClock")]);
		assert_eq!(packed.invoker().invoke(&[Variant::new(Arc::new(FixedClock(7)))]), 7);
	}
}
