//! HTTP transport for the login request.

pub mod api;
