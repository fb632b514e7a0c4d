pub mod atmosphere;
pub mod aerodynamics;

pub use aerodynamics::{drag_force, frontal_area};
pub use atmosphere::density;
