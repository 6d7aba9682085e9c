pub mod zone_controller;

pub use zone_controller::ZoneController;
