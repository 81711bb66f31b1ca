pub mod alert_queries;
pub mod appointment_queries;
pub mod parking_queries;
pub mod sensor_queries;
pub mod usage_queries;
