//! crew-router route-composition core
//!
//! Assembles geocoded stops from lodging and work-site records into an
//! ordered visit list, requests multi-stop driving itineraries from an
//! external routing service, and keeps map state and summary statistics
//! in step with the stop list.

pub mod geometry;
pub mod haversine;
pub mod nominatim;
pub mod osrm;
pub mod records;
pub mod route;
pub mod session;
pub mod stats;
pub mod traits;
pub mod waypoint;
