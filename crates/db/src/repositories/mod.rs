//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

mod ordering;

pub mod contact_message_repo;
pub mod experience_repo;
pub mod maintenance_repo;
pub mod page_settings_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod service_repo;
pub mod skill_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use experience_repo::ExperienceRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use page_settings_repo::{ProjectsManagementRepo, ServicesManagementRepo};
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use skill_repo::SkillRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
