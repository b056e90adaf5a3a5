pub mod access;
pub mod agent;
pub mod car_status;
pub mod clearance;
pub mod config;
pub mod debug;
pub mod error;
pub mod floor_set;
