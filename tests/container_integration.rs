use std::sync::Arc;

use inject_core::{object_family, Identifier, IdentifierStyle, ResolverConfig};
use mvvm_inject::demo::{build_container, EventLog, MemoryLog, SettingsStore, SettingsViewModel, EVENT_LOG_IID};
use mvvm_inject::{ContainerError, ServiceContainer};

#[test]
fn demo_graph_resolves_view_model_with_interface_and_instance() {
    let log = Arc::new(MemoryLog::default());
    let container = build_container(ResolverConfig::with_prefix("demo."), log.clone()).expect("container");

    let ids: Vec<&str> = container.identifiers().map(Identifier::as_str).collect();
    assert_eq!(ids, vec![EVENT_LOG_IID, "demo.SettingsStore", "demo.SettingsViewModel"]);
    let deps = container.dependencies_of(&Identifier::from("demo.SettingsViewModel")).expect("registered");
    assert_eq!(deps, &[Identifier::from(EVENT_LOG_IID), Identifier::from("demo.SettingsStore")]);

    let vm = container.get::<Arc<SettingsViewModel>>().expect("view model");
    assert_eq!(vm.title(), "Preferences");
    assert_eq!(log.lines(), vec!["SettingsViewModel created".to_string()]);

    // la instancia registrada es la que recibe la factory
    let store = container.get::<Arc<SettingsStore>>().expect("store");
    assert!(Arc::ptr_eq(&store, &vm.store));
    let shared_log = container.get::<Arc<dyn EventLog>>().expect("log");
    assert!(Arc::ptr_eq(&shared_log, &vm.log));
}

#[test]
fn factories_are_transient() {
    let container = build_container(ResolverConfig::default(), Arc::new(MemoryLog::default())).expect("container");
    let first = container.get::<Arc<SettingsViewModel>>().expect("first");
    let second = container.get::<Arc<SettingsViewModel>>().expect("second");
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.store, &second.store));
    assert_eq!(first.log.lines().len(), 2);
}

#[test]
fn missing_dependency_is_a_recoverable_container_error() {
    let mut container = ServiceContainer::new(ResolverConfig::with_prefix("demo."));
    container.add_instance(Arc::new(SettingsStore::default()));
    container.add_factory(SettingsViewModel::new);

    match container.get::<Arc<SettingsViewModel>>() {
        Err(ContainerError::NotRegistered(id)) => assert_eq!(id.as_str(), "demo.EventLog"),
        other => panic!("expected NotRegistered, got {:?}", other.map(|_| ())),
    }
}

pub struct Ping {
    _pong: Arc<Pong>,
}
pub struct Pong {
    _ping: Arc<Ping>,
}
object_family!(Ping);
object_family!(Pong);

#[test]
fn dependency_cycles_are_reported_with_the_chain() {
    let mut container = ServiceContainer::new(ResolverConfig::with_prefix("c."));
    container.add_factory(|pong: Arc<Pong>| Arc::new(Ping { _pong: pong }));
    container.add_factory(|ping: Arc<Ping>| Arc::new(Pong { _ping: ping }));

    let err = container.get::<Arc<Ping>>().err().expect("cycle");
    assert_eq!(err, ContainerError::Cycle(vec![Identifier::from("c.Ping"), Identifier::from("c.Pong"), Identifier::from("c.Ping")]));
    assert_eq!(err.to_string(), "dependency cycle: c.Ping -> c.Pong -> c.Ping");
}

mod first {
    pub struct Theme(pub &'static str);
    inject_core::object_family!(Theme);
}
mod second {
    pub struct Theme;
    inject_core::object_family!(Theme);
}

#[test]
fn class_name_collision_surfaces_as_type_collision() {
    let mut container = ServiceContainer::new(ResolverConfig::with_prefix("t."));
    container.add_instance(Arc::new(first::Theme("dark")));
    container.add_instance(Arc::new(second::Theme));

    assert_eq!(container.identifiers().count(), 1, "both themes map to t.Theme");
    assert!(matches!(container.get::<Arc<first::Theme>>(), Err(ContainerError::TypeCollision { .. })));
}

pub struct Window(pub Arc<first::Theme>);
object_family!(Window);

#[test]
fn factory_dependency_collision_is_reported_not_fatal() {
    let mut container = ServiceContainer::new(ResolverConfig::with_prefix("t."));
    container.add_instance(Arc::new(second::Theme));
    container.add_factory(|theme: Arc<first::Theme>| Arc::new(Window(theme)));

    assert!(container.get::<Arc<second::Theme>>().is_ok());
    match container.get::<Arc<Window>>() {
        Err(ContainerError::TypeCollision { identifier, expected, found }) => {
            assert_eq!(identifier.as_str(), "t.Theme");
            assert!(expected.contains("first::Theme"), "{expected}");
            assert!(found.contains("second::Theme"), "{found}");
        }
        other => panic!("expected TypeCollision, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn qualified_identifiers_keep_same_named_types_apart() {
    let config = ResolverConfig::with_prefix("t.").style(IdentifierStyle::QualifiedPath);
    let mut container = ServiceContainer::new(config);
    container.add_instance(Arc::new(first::Theme("dark")));
    container.add_instance(Arc::new(second::Theme));

    assert_eq!(container.identifiers().count(), 2);
    assert_eq!(container.get::<Arc<first::Theme>>().expect("first theme").0, "dark");
    assert!(container.get::<Arc<second::Theme>>().is_ok());
}

#[test]
fn conflicting_interface_registration_is_reported() {
    let container = build_container(ResolverConfig::default(), Arc::new(MemoryLog::default())).expect("container");
    let err = container.register_interface::<dyn EventLog>("other.IEventLog").err().expect("conflict");
    assert!(matches!(err, ContainerError::Bind(_)));
}
