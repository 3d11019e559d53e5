//! Integration tests for the catalog repositories.
//!
//! Exercises create/update/delete, slug uniqueness, ordering and the
//! visibility counters the admin handlers use for their caps.

use assert_matches::assert_matches;
use folio_core::types::Date;
use folio_db::models::experience::{CreateExperience, UpdateExperience};
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::service::{CreateService, UpdateService};
use folio_db::models::skill::CreateSkill;
use folio_db::models::testimonial::CreateTestimonial;
use folio_db::repositories::{
    ExperienceRepo, ProjectRepo, ServiceRepo, SkillRepo, TestimonialRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_service(title: &str) -> CreateService {
    CreateService {
        title: title.to_string(),
        slug: None,
        short_description: None,
        description: None,
        icon: None,
        starting_price: None,
        price_unit: None,
        features: Some(vec!["Responsive layout".into()]),
        technologies: None,
        delivery_time: None,
        sort_order: None,
        is_active: None,
        is_featured: None,
    }
}

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        slug: None,
        summary: None,
        description: None,
        category: category.to_string(),
        status: None,
        technologies: None,
        demo_url: None,
        repository_url: None,
        client_name: None,
        completion_date: None,
        sort_order: None,
        is_featured: None,
        is_published: None,
    }
}

fn new_skill(name: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        proficiency: 80,
        category: None,
        icon: None,
        display_type: None,
        is_visible: None,
        sort_order: None,
    }
}

fn new_testimonial(client: &str, featured: bool) -> CreateTestimonial {
    CreateTestimonial {
        client_name: client.to_string(),
        client_position: None,
        client_company: None,
        content: "Delivered on time and beyond expectations.".to_string(),
        rating: None,
        is_featured: Some(featured),
        sort_order: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_create_applies_defaults(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Web Apps"), "web-apps")
        .await
        .unwrap();

    assert_eq!(service.slug, "web-apps");
    assert!(service.is_active);
    assert!(!service.is_featured);
    assert_eq!(service.short_description, "");
    assert_eq!(service.features.0, vec!["Responsive layout".to_string()]);
    assert!(service.technologies.0.is_empty());
    assert_eq!(service.sort_order, 1);

    let second = ServiceRepo::create(&pool, &new_service("APIs"), "apis")
        .await
        .unwrap();
    assert_eq!(second.sort_order, 2, "new services are appended");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_duplicate_slug_violates_unique_constraint(pool: PgPool) {
    ServiceRepo::create(&pool, &new_service("Web Apps"), "web-apps")
        .await
        .unwrap();
    let err = ServiceRepo::create(&pool, &new_service("Web Apps 2"), "web-apps")
        .await
        .unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("uq_services_slug")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_exists_can_exclude_own_row(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Web Apps"), "web-apps")
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Shop", "web"), "shop", "completed")
        .await
        .unwrap();

    assert!(ServiceRepo::slug_exists(&pool, "web-apps", None).await.unwrap());
    assert!(!ServiceRepo::slug_exists(&pool, "web-apps", Some(service.id)).await.unwrap());
    assert!(!ServiceRepo::slug_exists(&pool, "shop", None).await.unwrap());

    assert!(ProjectRepo::slug_exists(&pool, "shop", None).await.unwrap());
    assert!(!ProjectRepo::slug_exists(&pool, "shop", Some(project.id)).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_partial_update_keeps_other_fields(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Web Apps"), "web-apps")
        .await
        .unwrap();

    let update = UpdateService {
        starting_price: Some(499.0),
        ..Default::default()
    };
    let updated = ServiceRepo::update(&pool, service.id, &update)
        .await
        .unwrap()
        .expect("service exists");

    assert_eq!(updated.starting_price, Some(499.0));
    assert_eq!(updated.title, "Web Apps");
    assert_eq!(updated.features.0, service.features.0);

    let missing = ServiceRepo::update(&pool, 9999, &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_services_hidden_from_public_lookup(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Web Apps"), "web-apps")
        .await
        .unwrap();
    let toggled = ServiceRepo::toggle_active(&pool, service.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.is_active);

    assert!(ServiceRepo::find_active_by_slug(&pool, "web-apps")
        .await
        .unwrap()
        .is_none());
    assert!(ServiceRepo::list(&pool, false).await.unwrap().is_empty());
    assert_eq!(ServiceRepo::list(&pool, true).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_delete_returns_removed_row(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Web Apps"), "web-apps")
        .await
        .unwrap();
    ServiceRepo::set_image_path(&pool, service.id, "services/a.png")
        .await
        .unwrap();

    let deleted = ServiceRepo::delete(&pool, service.id).await.unwrap().unwrap();
    assert_eq!(deleted.image_path.as_deref(), Some("services/a.png"));
    assert!(ServiceRepo::delete(&pool, service.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_rewrites_sort_order(pool: PgPool) {
    let a = ServiceRepo::create(&pool, &new_service("A"), "a").await.unwrap();
    let b = ServiceRepo::create(&pool, &new_service("B"), "b").await.unwrap();
    let c = ServiceRepo::create(&pool, &new_service("C"), "c").await.unwrap();

    assert!(ServiceRepo::reorder(&pool, &[c.id, a.id, b.id]).await.unwrap());

    let titles: Vec<String> = ServiceRepo::list(&pool, true)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_with_unknown_id_changes_nothing(pool: PgPool) {
    let a = SkillRepo::create(&pool, &new_skill("Rust"), "progress").await.unwrap();
    let b = SkillRepo::create(&pool, &new_skill("Go"), "progress").await.unwrap();

    assert!(!SkillRepo::reorder(&pool, &[b.id, a.id, 9999]).await.unwrap());

    let a_after = SkillRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    assert_eq!(a_after.sort_order, a.sort_order);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_projects_filter_by_category(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Shop", "web"), "shop", "completed")
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("Tracker", "mobile"), "tracker", "in_progress")
        .await
        .unwrap();
    let hidden = ProjectRepo::create(&pool, &new_project("Draft", "web"), "draft", "planned")
        .await
        .unwrap();
    ProjectRepo::toggle_published(&pool, hidden.id).await.unwrap();

    assert_eq!(ProjectRepo::list_published(&pool, None).await.unwrap().len(), 2);

    let web = ProjectRepo::list_published(&pool, Some("web")).await.unwrap();
    assert_eq!(web.len(), 1);
    assert_eq!(web[0].slug, "shop");
    assert_eq!(ProjectRepo::list_published(&pool, Some("WEB")).await.unwrap().len(), 1);

    assert!(ProjectRepo::find_published_by_slug(&pool, "draft")
        .await
        .unwrap()
        .is_none());
    assert_eq!(ProjectRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_update_and_featured_toggle(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Shop", "web"), "shop", "completed")
        .await
        .unwrap();

    let update = UpdateProject {
        status: Some("in_progress".into()),
        technologies: Some(vec!["Rust".into(), "Postgres".into()]),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "in_progress");
    assert_eq!(updated.technologies.0.len(), 2);

    let featured = ProjectRepo::toggle_featured(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert!(featured.is_featured);
    assert_eq!(ProjectRepo::list_featured(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Skills and testimonials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_visible_skills_excludes_given_id(pool: PgPool) {
    let rust = SkillRepo::create(&pool, &new_skill("Rust"), "progress").await.unwrap();
    SkillRepo::create(&pool, &new_skill("SQL"), "progress").await.unwrap();
    SkillRepo::create(&pool, &new_skill("Docker"), "card").await.unwrap();

    assert_eq!(SkillRepo::count_visible(&pool, "progress", None).await.unwrap(), 2);
    assert_eq!(
        SkillRepo::count_visible(&pool, "progress", Some(rust.id)).await.unwrap(),
        1
    );

    SkillRepo::set_visible(&pool, rust.id, false).await.unwrap();
    assert_eq!(SkillRepo::count_visible(&pool, "progress", None).await.unwrap(), 1);
    assert_eq!(SkillRepo::list_visible(&pool, "progress").await.unwrap().len(), 1);
    assert_eq!(SkillRepo::list_visible(&pool, "card").await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn proficiency_out_of_range_rejected_by_check(pool: PgPool) {
    let mut skill = new_skill("Rust");
    skill.proficiency = 150;
    let err = SkillRepo::create(&pool, &skill, "progress").await.unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("ck_skills_proficiency")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn featured_testimonials_counted(pool: PgPool) {
    let first = TestimonialRepo::create(&pool, &new_testimonial("Ana", true))
        .await
        .unwrap();
    TestimonialRepo::create(&pool, &new_testimonial("Ben", true))
        .await
        .unwrap();
    TestimonialRepo::create(&pool, &new_testimonial("Cy", false))
        .await
        .unwrap();

    assert_eq!(first.rating, 5, "rating defaults to five stars");
    assert_eq!(TestimonialRepo::count_featured(&pool, None).await.unwrap(), 2);
    assert_eq!(
        TestimonialRepo::count_featured(&pool, Some(first.id)).await.unwrap(),
        1
    );
    assert_eq!(TestimonialRepo::list_featured(&pool).await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_experience_never_stores_end_date(pool: PgPool) {
    let input = CreateExperience {
        company: "Acme".into(),
        position: "Engineer".into(),
        location: None,
        employment_type: None,
        description: None,
        start_date: date(2021, 3, 1),
        end_date: Some(date(2023, 1, 1)),
        is_current: true,
        sort_order: None,
    };
    let exp = ExperienceRepo::create(&pool, &input).await.unwrap();
    assert!(exp.is_current);
    assert_eq!(exp.end_date, None);

    let ended = ExperienceRepo::update(
        &pool,
        exp.id,
        &UpdateExperience {
            is_current: Some(false),
            end_date: Some(date(2024, 6, 30)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!ended.is_current);
    assert_eq!(ended.end_date, Some(date(2024, 6, 30)));

    let current_again = ExperienceRepo::update(
        &pool,
        exp.id,
        &UpdateExperience {
            is_current: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(current_again.end_date, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inverted_experience_range_rejected_by_check(pool: PgPool) {
    let input = CreateExperience {
        company: "Acme".into(),
        position: "Engineer".into(),
        location: None,
        employment_type: None,
        description: None,
        start_date: date(2022, 1, 1),
        end_date: Some(date(2021, 1, 1)),
        is_current: false,
        sort_order: None,
    };
    let err = ExperienceRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("ck_experiences_range")
    );
}
