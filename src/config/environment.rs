//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del proceso una sola vez al arrancar.
//! Todas las variables son opcionales y tienen un valor por defecto.

use std::env;

use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "/app/data/database.db";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Error al leer una variable de entorno con formato inválido
#[derive(Error, Debug, PartialEq)]
#[error("invalid value for {name}: '{value}' ({reason})")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub api_prefix: String,
    pub database_path: String,
    pub db_max_connections: u32,
    pub cors_origins: Vec<String>,
    pub legacy_create_route: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8000,
            host: "0.0.0.0".to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            db_max_connections: 5,
            cors_origins: Vec::new(),
            legacy_create_route: false,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda.
    /// Separado de `from_env` para poder probarlo sin tocar el entorno global.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_number("PORT", &raw)?,
            None => defaults.port,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_number("DB_MAX_CONNECTIONS", &raw)?,
            None => defaults.db_max_connections,
        };

        let legacy_create_route = match lookup("LEGACY_CREATE_ROUTE") {
            Some(raw) => parse_flag("LEGACY_CREATE_ROUTE", &raw)?,
            None => defaults.legacy_create_route,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            api_prefix: normalize_prefix(&lookup("API_PREFIX").unwrap_or(defaults.api_prefix)),
            database_path: lookup("DATABASE_PATH")
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.database_path),
            db_max_connections,
            cors_origins,
            legacy_create_route,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError {
            name,
            value: raw.to_string(),
            reason: "expected true/false".to_string(),
        }),
    }
}

/// `/api/v1/` -> `/api/v1`, `api` -> `/api`, `/` -> ``
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.port, 8000);
        assert!(!config.legacy_create_route);
        assert!(config.cors_origins.is_empty());
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/tmp/zones/db.sqlite"),
            ("PORT", "9090"),
            ("API_PREFIX", "api/v2/"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("LEGACY_CREATE_ROUTE", "TRUE"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, "/tmp/zones/db.sqlite");
        assert_eq!(config.port, 9090);
        assert_eq!(config.api_prefix, "/api/v2");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.legacy_create_route);
        assert!(config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:9090");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err.name, "PORT");
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("LEGACY_CREATE_ROUTE", "maybe")]))
            .unwrap_err();
        assert_eq!(err.name, "LEGACY_CREATE_ROUTE");
    }

    #[test]
    fn test_root_prefix_normalizes_to_empty() {
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix("/api/v1"), "/api/v1");
    }
}
