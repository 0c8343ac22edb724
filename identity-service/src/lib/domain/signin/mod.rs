pub mod models;
pub mod pipeline;
pub mod ports;
