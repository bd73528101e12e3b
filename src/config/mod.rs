// src/config/mod.rs
//! Configuration for the hasher
//!
//! Plain TOML, all fields optional. Nothing is read from the environment;
//! the host application decides where the file lives.

pub use app::{HasherConfig, SummaryConfig};

mod app;
mod defaults;
