//! Domain layer for the Folio portfolio backend.
//!
//! Pure logic only: no database or HTTP types live here. The `db` and `api`
//! crates call into these modules for validation rules, content-block
//! shapes, singleton defaults, upload rules and id resequencing plans.

pub mod blocks;
pub mod content;
pub mod defaults;
pub mod error;
pub mod pagination;
pub mod resequence;
pub mod roles;
pub mod types;
pub mod uploads;
