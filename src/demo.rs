//! Servicios de ejemplo: un log, un almacén de ajustes y un view-model que
//! depende de ambos. Los usa `inject-demo` y los tests de integración.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use inject_core::{implements, object_family, ResolverConfig};
use log::info;

use crate::container::ServiceContainer;
use crate::errors::ContainerError;

/// Identificador de interfaz estable para `dyn EventLog`.
pub const EVENT_LOG_IID: &str = "org.mvvm.demo.IEventLog";

pub trait EventLog: Send + Sync {
    fn record(&self, line: &str);
    fn lines(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl EventLog for MemoryLog {
    fn record(&self, line: &str) {
        info!("{line}");
        // un panic de otro hilo no invalida el Vec: se sigue registrando
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[derive(Debug, Default)]
pub struct SettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// View-model construido por factory: recibe sus dependencias por
/// parámetro, nunca las busca.
pub struct SettingsViewModel {
    pub log: Arc<dyn EventLog>,
    pub store: Arc<SettingsStore>,
}

impl SettingsViewModel {
    pub fn new(log: Arc<dyn EventLog>, store: Arc<SettingsStore>) -> Arc<Self> {
        log.record("SettingsViewModel created");
        Arc::new(Self { log, store })
    }

    pub fn title(&self) -> String {
        self.store.get("title").unwrap_or("untitled").to_string()
    }
}

object_family!(dyn EventLog);
object_family!(MemoryLog);
object_family!(SettingsStore);
object_family!(SettingsViewModel);
implements!(MemoryLog => dyn EventLog);

/// Arma el contenedor de la demo: interfaz registrada para el log, instancia
/// para los ajustes y factory para el view-model.
pub fn build_container(config: ResolverConfig, log: Arc<MemoryLog>) -> Result<ServiceContainer, ContainerError> {
    let mut container = ServiceContainer::new(config);
    container.register_interface::<dyn EventLog>(EVENT_LOG_IID)?;
    container.add_service::<dyn EventLog, _>(log);
    container.add_instance(Arc::new(SettingsStore::default().with("title", "Preferences")));
    container.add_factory(SettingsViewModel::new);
    Ok(container)
}
