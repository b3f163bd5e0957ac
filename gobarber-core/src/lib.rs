//! Client library for the GoBarber scheduling app.
//!
//! - `dashboard` holds the provider calendar state (month, selected day,
//!   availability) and tags every fetch so stale responses are dropped
//! - `forms` validates and submits sign-in, sign-up and profile data
//! - `api` and `session` talk to the REST API and keep the signed-in user

pub mod api;
pub mod app;
pub mod availability;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod month;
pub mod route;
pub mod schedule;
pub mod session;
pub mod toast;
pub mod user;
pub mod validation;

pub use app::App;
pub use error::{GoBarberError, GoBarberResult};
