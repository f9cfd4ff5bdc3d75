//! HTTP API for the course platform.
//!
//! Exposes the instructor authoring surface (`/api/v1/courses`) and the
//! student surface (`/api/v1/browse`, `/api/v1/categories`) behind a JWT
//! authentication gate. Router construction lives in [`router`] so the
//! binary and integration tests share the exact same middleware stack.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod video;
