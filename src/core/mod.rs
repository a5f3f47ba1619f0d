pub mod aggregate;
pub mod errors;
pub mod models;
pub mod service;
pub mod units;
