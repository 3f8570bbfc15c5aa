/// Secrets loading for live-tenant smoke tests.
pub mod config;
