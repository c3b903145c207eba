// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod directory;
pub mod gui;
pub mod labour;
pub mod locations;
pub mod provider;
pub mod query;
pub mod store;
pub mod validate;
