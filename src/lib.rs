//! `retdist` library crate.
//!
//! The binary (`retdist`) is a thin wrapper around this library so that:
//!
//! - the statistics and the request pipeline are testable without spawning processes
//! - an HTTP front-end can reuse `app::respond` without pulling in the CLI

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod math;
pub mod report;
