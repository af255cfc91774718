pub mod appconfig;
pub mod controllers;
pub mod dashboard;
pub mod dataset;
pub mod settings;
pub mod telemetry;
pub mod version;
