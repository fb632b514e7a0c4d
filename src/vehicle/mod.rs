pub mod airframe;

pub use airframe::{Vehicle, VehicleBuilder};
