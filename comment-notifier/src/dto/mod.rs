//!
//! Module with all dtos that are passed between the service and its triggers
//!

pub mod input;
