// src/core/mod.rs
//! Pure scheme primitives: no I/O, no global state
pub mod credential;
pub mod digest;
pub mod salt;
pub mod summary;

pub use credential::*;
pub use digest::*;
pub use salt::*;
pub use summary::*;
