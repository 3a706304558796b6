//! # Slotbook Core
//!
//! Domain types shared by the Slotbook booking service: the slot catalog
//! model, booking DTOs, the error taxonomy, and contact-field validation.
//!
//! This crate is deliberately free of I/O: the database layer
//! (`slotbook-db`) and the web layer (`slotbook-api`) both depend on it,
//! never the other way around.

pub mod errors;
pub mod models;
pub mod validation;
