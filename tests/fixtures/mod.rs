//! Test fixtures for crew-router.
//!
//! Realistic operation records around Ituiutaba, MG, with the coordinates
//! their addresses resolve to, for seeding stub geocoders.

pub mod ituiutaba;
