//! Constantes del binder.
//!
//! Los valores por defecto de `ResolverConfig` viven aquí; el resolver nunca
//! los lee directamente, siempre pasan por su configuración.

/// Prefijo de namespace por defecto para identificadores sintetizados.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "org.mvvm.injectable.";

/// Variable de entorno que sobreescribe el prefijo.
pub const ENV_NAMESPACE_PREFIX: &str = "INJECT_NAMESPACE_PREFIX";

/// Variable de entorno con el estilo de nombre (`class` | `qualified`).
pub const ENV_IDENTIFIER_STYLE: &str = "INJECT_IDENTIFIER_STYLE";

/// Aridad máxima soportada por `Packable`.
pub const MAX_ARITY: usize = 16;
