pub mod event;
pub mod integrator;
pub mod result;
pub mod runner;

pub use event::{AbortReason, EventKind};
pub use integrator::euler_step;
pub use result::{FlightEvent, Outcome, Sample, SimulationResult};
pub use runner::simulate;
