//! API endpoint modules.

mod geo;
mod internetdb;
mod minecraft;

pub use geo::GeoApi;
pub use internetdb::InternetDbApi;
pub use minecraft::MinecraftApi;
