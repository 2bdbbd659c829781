//! # Domain Models
//!
//! This crate contains the typed configuration entities of the limebird.org site
//! with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or validation—just data, canonical defaults and simple helpers.

pub mod config;
pub mod constants;
pub mod environment;
pub mod marketing;
pub mod tracker;
