//! Modulspace site library.
//!
//! This crate provides the site backend as a library, allowing the router
//! to be built and exercised in integration tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
