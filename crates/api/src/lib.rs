//! HTTP request surface for order ingestion.

pub mod app;
pub mod config;
