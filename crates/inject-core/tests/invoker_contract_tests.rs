//! Violaciones de contrato del invoker: longitud o tipos incorrectos nunca
//! llegan a llamar al callable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use inject_core::{object_family, ContractViolation, IdentifierResolver, NoInterfaces, ParameterBinder, ResolverConfig, Variant};

pub struct Repo;
pub struct Cache;
object_family!(Repo);
object_family!(Cache);

fn binder() -> ParameterBinder {
    ParameterBinder::new(IdentifierResolver::new(ResolverConfig::default(), Arc::new(NoInterfaces)))
}

#[test]
fn short_list_is_an_arity_violation() {
    let packed = binder().pack(|_r: Arc<Repo>, _c: Arc<Cache>| ());
    let err = packed.invoker().try_invoke(&[Variant::new(Arc::new(Repo))]).unwrap_err();
    assert_eq!(err, ContractViolation::ArityMismatch { expected: 2, found: 1 });
}

#[test]
fn long_list_is_an_arity_violation() {
    let packed = binder().pack(|_r: Arc<Repo>| ());
    let values = [Variant::new(Arc::new(Repo)), Variant::new(Arc::new(Repo))];
    assert_eq!(packed.invoker().try_invoke(&values).unwrap_err(),
               ContractViolation::ArityMismatch { expected: 1, found: 2 });
}

#[test]
fn zero_arity_rejects_non_empty_list() {
    let packed = binder().pack(|| "never");
    let err = packed.invoker().try_invoke(&[Variant::new(Arc::new(Cache))]).unwrap_err();
    assert_eq!(err, ContractViolation::ArityMismatch { expected: 0, found: 1 });
}

#[test]
fn wrong_type_reports_position_and_types() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let packed = binder().pack(move |_r: Arc<Repo>, _c: Arc<Cache>| {
                                   counter.fetch_add(1, Ordering::SeqCst);
                               });

    let values = [Variant::new(Arc::new(Repo)), Variant::new(Arc::new(Repo))];
    match packed.invoker().try_invoke(&values) {
        Err(ContractViolation::TypeMismatch { position, expected, found }) => {
            assert_eq!(position, 1);
            assert!(expected.contains("Cache"), "{expected}");
            assert!(found.contains("Repo"), "{found}");
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "callable must not run on a violation");
}

#[test]
#[should_panic(expected = "contract violation")]
fn invoke_panics_on_arity_violation() {
    let packed = binder().pack(|_r: Arc<Repo>| ());
    packed.invoker().invoke(&[]);
}

#[test]
#[should_panic(expected = "contract violation")]
fn invoke_panics_on_type_violation() {
    let packed = binder().pack(|_r: Arc<Repo>| ());
    packed.invoker().invoke(&[Variant::new(Arc::new(Cache))]);
}
