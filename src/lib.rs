//! Life Balance - self-assessment survey wizard engine
//!
//! A user rates seven life areas as they are today, then again imagining
//! extra money and extra time. The crate drives that wizard, then compares
//! the three rating sets and recommends one action per scenario.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
