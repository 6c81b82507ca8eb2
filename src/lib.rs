//! ERP Core Library
//!
//! This crate provides the transactional core of a single-user, offline ERP:
//! entity store, order lifecycles (purchase, work, sales), inventory
//! valuation, finance ledger and read-side reporting.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod app;
pub mod commands;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod reports;
pub mod store;

pub use app::App;
pub use commands::{Command, TransitionOutcome};
pub use errors::ServiceError;
pub use store::Store;
