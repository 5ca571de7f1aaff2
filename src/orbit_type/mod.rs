//! # Orbital element representations
//!
//! Only the classical [`keplerian_element`](crate::orbit_type::keplerian_element) set
//! `(a, e, i, Ω, ω, M)` is carried: every body tracked by the scene moves on a
//! closed elliptic orbit, and the elements arrive from published tables in that form.

/// Classical Keplerian elements structure and utilities.
pub mod keplerian_element;

pub use keplerian_element::KeplerianElements;
