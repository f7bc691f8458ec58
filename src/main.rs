//! `inject-demo`: arma un contenedor pequeño, resuelve el view-model y
//! muestra los identificadores que ha producido el binder.
//!
//! Configuración por entorno (o `.env`): `INJECT_NAMESPACE_PREFIX`,
//! `INJECT_IDENTIFIER_STYLE`, `RUST_LOG`.

use std::process::ExitCode;
use std::sync::Arc;

use inject_core::config::init_dotenv;
use inject_core::ResolverConfig;
use log::{error, info};
use mvvm_inject::demo::{build_container, MemoryLog, SettingsViewModel};
use mvvm_inject::ContainerError;

fn run() -> Result<(), ContainerError> {
    let config = ResolverConfig::from_env()?;
    info!("resolver config: {}", serde_json::to_string(&config).unwrap_or_default());

    let container = build_container(config, Arc::new(MemoryLog::default()))?;
    for id in container.identifiers() {
        let deps = container.dependencies_of(id).unwrap_or_default();
        info!("{id} <- [{}]", deps.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", "));
    }

    let vm = container.get::<Arc<SettingsViewModel>>()?;
    info!("view model ready: title={:?}, log lines={}", vm.title(), vm.log.lines().len());
    Ok(())
}

fn main() -> ExitCode {
    init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
