//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod contact_message;
pub mod experience;
pub mod page_settings;
pub mod profile;
pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;
pub mod user;
