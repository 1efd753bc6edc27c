//! Offer Letter Compensation Engine
//!
//! This crate turns the compensation fields of an employment offer form into
//! the salary structure printed on the letter: monthly and annual component
//! totals, bonus subtotals, the headline CTC, and the reverse split of an
//! annual CTC into monthly components.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod presentation;
