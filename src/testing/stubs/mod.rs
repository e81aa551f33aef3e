pub mod synthetic_sensor;

pub use synthetic_sensor::SyntheticSensor;
