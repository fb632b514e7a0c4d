pub mod curve;
pub mod decode;
pub mod eng;
pub mod profile;

pub use curve::{ThrustCurve, ThrustSample};
pub use decode::TextEncoding;
pub use eng::{EngFile, EngHeader, MotorFileError};
pub use profile::{ConstantMotor, MotorProfile, SampledMotor};
