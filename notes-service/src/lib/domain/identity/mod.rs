pub mod errors;
pub mod models;
pub mod ports;
pub mod refresh;
pub mod service;
