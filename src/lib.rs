//! Fresh Air Duct Cleaning site
//!
//! Server-rendered brochure pages (home, services, contact) and the quote
//! request form: validation, submission and outcome reporting.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;
