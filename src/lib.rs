pub mod cli;
pub mod config;
pub mod dynamics;
pub mod io;
pub mod motor;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use config::{ConfigError, RunConfig};
pub use motor::{MotorFileError, MotorProfile};
pub use sim::{simulate, Outcome, SimulationResult};
pub use vehicle::Vehicle;

