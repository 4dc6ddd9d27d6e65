//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `validation`: Rules a record must satisfy before it is stored
//! - `fuel`: Fuel estimation for trips to a stored planet

pub mod entities;
pub mod fuel;
pub mod ports;
pub mod validation;
