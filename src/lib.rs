// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod gui;
pub mod league;
pub mod progress;
pub mod remote;

pub use error::{Error, Result};
