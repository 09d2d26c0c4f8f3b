pub mod coordinate;
pub mod console;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::PolarKit;

pub use coordinate::{CartesianPoint, CylindricalPoint, CylindricalTransformer, OriginOffset};
pub use console::ConsoleSession;
