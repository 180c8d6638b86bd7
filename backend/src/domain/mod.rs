//! Core calculation domain for the take-home pay calculator.
//!
//! Everything in here is pure: a [`User`] is a validated snapshot of one
//! request's inputs, a [`Calculator`] turns it into a
//! [`Breakdown`](calculator::Breakdown), and the
//! presentation helpers reshape that breakdown for the table and Sankey
//! views. No state survives a request.

pub mod calculator;
pub mod errors;
pub mod periods;
pub mod presentation;
pub mod user;

pub use calculator::Calculator;
pub use user::User;
