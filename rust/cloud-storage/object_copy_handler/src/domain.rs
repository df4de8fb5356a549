//! This module defines the domain of the copy handler

#[cfg(test)]
pub(crate) mod fixtures;
pub mod models;
pub mod ports;
pub mod service;
