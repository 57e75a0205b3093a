//! GRC platform shell: mock authentication, route gating, and the dashboard
//! pages served over Axum.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gate;
pub mod routes;
pub mod state;
pub mod storage;
