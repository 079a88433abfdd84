//! Background tasks that run alongside the HTTP server.

pub mod maintenance;

pub use maintenance::spawn_maintenance;
