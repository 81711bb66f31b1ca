pub mod alert;
pub mod sensor;
pub mod usage;

pub use alert::{AlertKind, AlertRecord};
pub use sensor::{Sensor, SensorKind};
pub use usage::{UsageKind, UsageReading};
