//! Wage supplement engine for the CrewPlan workforce scheduler.
//!
//! This crate computes Norwegian wage supplements (night, evening, weekend and
//! public-holiday premiums) for worked shifts, together with the Norwegian
//! public holiday calendar including its movable Easter-derived dates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
