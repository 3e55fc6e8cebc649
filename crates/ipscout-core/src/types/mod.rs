mod common;
mod geo;
mod intel;
mod minecraft;
mod scan;

pub use common::*;
pub use geo::*;
pub use intel::*;
pub use minecraft::*;
pub use scan::*;
