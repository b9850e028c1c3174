//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repositories and pure metric/advice functions into the
//!   request/response API the presentation layer calls.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod auth_service;
pub mod health_service;
