pub mod catalog;
pub mod entities;
pub mod errors;
pub mod ports;
