//! # Customer Desk
//!
//! A terminal client for a customer REST backend.
//!
//! ## Features
//! - Customer table loaded once from `GET /api/customers`
//! - Add-customer dialog with inline field validation
//! - New customers submitted with `POST /api/customers` and appended locally
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod validation;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Customer, CustomerDraft, DraftField, FieldErrors};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
