//! Partner matching and federal income tax estimation engines, plus the thin
//! HTTP/CLI surface that serves them.
//!
//! The two engines under [`engines`] are pure and stateless: the matching
//! engine ranks filing-partner offers against a taxpayer profile, and the tax
//! engine computes bracket tax, self-employment tax, and credit phase-outs
//! from immutable per-year parameter tables. Everything else in the crate is
//! delivery packaging around them.

pub mod api;
pub mod config;
pub mod engines;
pub mod error;
pub mod telemetry;
