//! Application layer: service orchestration over the domain and repositories.

pub mod services;
