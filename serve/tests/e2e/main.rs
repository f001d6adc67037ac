//! End-to-end tests for the HTTP server: bind to a random port, spawn the
//! server in once mode, talk to it over real HTTP.

mod common;

mod analyze_local;
mod health;
mod invalid_json;
mod validation;
