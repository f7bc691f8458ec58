//! Configuración del `IdentifierResolver`.
//!
//! El prefijo de namespace y el estilo de nombre son propiedad de cada
//! instancia del resolver. Se pueden construir por código, desde JSON o desde
//! variables de entorno (`INJECT_NAMESPACE_PREFIX`, `INJECT_IDENTIFIER_STYLE`,
//! con soporte de `.env`).

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NAMESPACE_PREFIX, ENV_IDENTIFIER_STYLE, ENV_NAMESPACE_PREFIX};
use crate::errors::BindError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Cómo se sintetiza el nombre cuando no hay interfaz registrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStyle {
    /// `prefix + CLASS_NAME`. Dos tipos con el mismo nombre de clase en
    /// módulos distintos colisionan.
    #[default]
    ClassName,
    /// `prefix + ruta Rust completa` con `::` como `.`. Se basa en
    /// `std::any::type_name`, que no garantiza unicidad ni estabilidad entre
    /// versiones del compilador: distingue tipos homónimos en la práctica,
    /// sin garantía formal.
    QualifiedPath,
}

impl FromStr for IdentifierStyle {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" | "class_name" => Ok(Self::ClassName),
            "qualified" | "qualified_path" => Ok(Self::QualifiedPath),
            other => Err(BindError::Config(format!("unknown identifier style `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub namespace_prefix: String,
    pub style: IdentifierStyle,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
               style: IdentifierStyle::default() }
    }
}

impl ResolverConfig {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { namespace_prefix: prefix.into(),
               ..Self::default() }
    }

    pub fn style(mut self, style: IdentifierStyle) -> Self {
        self.style = style;
        self
    }

    /// Lee la configuración del entorno; las variables ausentes usan los
    /// valores por defecto. Un estilo desconocido es un error.
    pub fn from_env() -> Result<Self, BindError> {
        Lazy::force(&DOTENV_LOADED);
        let namespace_prefix = env::var(ENV_NAMESPACE_PREFIX).unwrap_or_else(|_| DEFAULT_NAMESPACE_PREFIX.to_string());
        let style = match env::var(ENV_IDENTIFIER_STYLE) {
            Ok(raw) => raw.parse()?,
            Err(_) => IdentifierStyle::default(),
        };
        Ok(Self { namespace_prefix, style })
    }

    pub fn from_json(raw: &str) -> Result<Self, BindError> {
        serde_json::from_str(raw).map_err(|e| BindError::Config(e.to_string()))
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_both_spellings() {
        assert_eq!("class".parse::<IdentifierStyle>(), Ok(IdentifierStyle::ClassName));
        assert_eq!(" Qualified_Path ".parse::<IdentifierStyle>(), Ok(IdentifierStyle::QualifiedPath));
        assert!(matches!("fqcn".parse::<IdentifierStyle>(), Err(BindError::Config(_))));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let cfg = ResolverConfig::from_json(r#"{"style": "qualified_path"}"#).expect("valid json");
        assert_eq!(cfg.namespace_prefix, DEFAULT_NAMESPACE_PREFIX);
        assert_eq!(cfg.style, IdentifierStyle::QualifiedPath);

        assert!(ResolverConfig::from_json(r#"{"style": 3}"#).is_err());
    }
}
