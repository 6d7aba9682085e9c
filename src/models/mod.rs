//! Modelos de datos
//!
//! Zone es la única entidad persistida. Device (device_id, zone_id, name) y
//! Measure (measure_id, device_id, name, value, due_date, created_at) están
//! previstas como extensiones futuras que referenciarían a Zone.

pub mod zone;

pub use zone::{seed_zones, Zone, ZoneCreate};
