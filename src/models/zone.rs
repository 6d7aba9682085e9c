//! Modelo de Zone
//!
//! Este módulo contiene el struct Zone y su variante de entrada para
//! operaciones CRUD. Mapea exactamente a la tabla `zone`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Zone principal - mapea a la tabla zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Zone {
    pub zone_id: i64,
    pub name: String,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload para crear o reemplazar una zona.
///
/// No lleva identificador ni fecha de creación: ambos los asigna el
/// almacenamiento. `region` puede omitirse o enviarse como `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl ZoneCreate {
    pub fn new(name: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            name: name.into(),
            region: region.map(str::to_string),
        }
    }
}

/// Zonas insertadas cuando la tabla está vacía al arrancar
pub fn seed_zones() -> [ZoneCreate; 2] {
    [
        ZoneCreate::new("Milan", Some("Italy North")),
        ZoneCreate::new("Rome", Some("Italy Center")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zone_create_region_is_optional() {
        let payload: ZoneCreate = serde_json::from_value(json!({ "name": "Turin" })).unwrap();
        assert_eq!(payload, ZoneCreate::new("Turin", None));

        let payload: ZoneCreate =
            serde_json::from_value(json!({ "name": "Turin", "region": null })).unwrap();
        assert_eq!(payload.region, None);
    }

    #[test]
    fn test_zone_create_requires_name() {
        let result = serde_json::from_value::<ZoneCreate>(json!({ "region": "Piedmont" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_zone_serializes_with_rfc3339_timestamp() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let zone = Zone {
            zone_id: 7,
            name: "Milan".to_string(),
            region: None,
            created_at,
        };

        let value = serde_json::to_value(&zone).unwrap();
        assert_eq!(value["zone_id"], 7);
        assert_eq!(value["region"], serde_json::Value::Null);
        assert_eq!(value["created_at"], "2024-05-01T10:00:00Z");
    }
}
