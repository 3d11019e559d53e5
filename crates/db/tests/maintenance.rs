//! Integration tests for id resequencing.

use folio_core::resequence::{IdMapping, RESEQUENCABLE_TABLES};
use folio_db::models::service::CreateService;
use folio_db::models::skill::CreateSkill;
use folio_db::repositories::{MaintenanceRepo, ServiceRepo, SkillRepo};
use sqlx::PgPool;

fn new_skill(name: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        proficiency: 50,
        category: None,
        icon: None,
        display_type: None,
        is_visible: Some(false),
        sort_order: None,
    }
}

fn new_service(title: &str, features: &[&str]) -> CreateService {
    CreateService {
        title: title.to_string(),
        slug: None,
        short_description: None,
        description: None,
        icon: None,
        starting_price: Some(500.0),
        price_unit: None,
        features: Some(features.iter().map(|f| f.to_string()).collect()),
        technologies: None,
        delivery_time: None,
        sort_order: None,
        is_active: None,
        is_featured: None,
    }
}

async fn skill_ids_and_names(pool: &PgPool) -> Vec<(i64, String)> {
    sqlx::query_as("SELECT id, name FROM skills ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gaps_are_closed_in_original_order(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["Rust", "Go", "SQL", "Docker", "Linux"] {
        ids.push(SkillRepo::create(&pool, &new_skill(name), "card").await.unwrap().id);
    }
    SkillRepo::delete(&pool, ids[1]).await.unwrap();
    SkillRepo::delete(&pool, ids[3]).await.unwrap();

    let before = SkillRepo::find_by_id(&pool, ids[4]).await.unwrap().unwrap();
    let plan = MaintenanceRepo::resequence_ids(&pool, "skills").await.unwrap();

    assert_eq!(
        plan,
        vec![
            IdMapping { old_id: ids[0], new_id: 1 },
            IdMapping { old_id: ids[2], new_id: 2 },
            IdMapping { old_id: ids[4], new_id: 3 },
        ]
    );
    assert_eq!(
        skill_ids_and_names(&pool).await,
        vec![(1, "Rust".into()), (2, "SQL".into()), (3, "Linux".into())]
    );

    let moved = SkillRepo::find_by_id(&pool, 3).await.unwrap().unwrap();
    assert_eq!(moved.created_at, before.created_at);
    assert_eq!(moved.sort_order, before.sort_order);

    let next = SkillRepo::create(&pool, &new_skill("Kubernetes"), "card").await.unwrap();
    assert_eq!(next.id, 4, "sequence continues after the last id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sequential_table_is_left_alone(pool: PgPool) {
    SkillRepo::create(&pool, &new_skill("Rust"), "card").await.unwrap();
    SkillRepo::create(&pool, &new_skill("Go"), "card").await.unwrap();

    let plan = MaintenanceRepo::resequence_ids(&pool, "skills").await.unwrap();
    assert!(plan.is_empty());

    let next = SkillRepo::create(&pool, &new_skill("SQL"), "card").await.unwrap();
    assert_eq!(next.id, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_table_resets_sequence(pool: PgPool) {
    let skill = SkillRepo::create(&pool, &new_skill("Rust"), "card").await.unwrap();
    SkillRepo::delete(&pool, skill.id).await.unwrap();

    let plan = MaintenanceRepo::resequence_ids(&pool, "skills").await.unwrap();
    assert!(plan.is_empty());

    let next = SkillRepo::create(&pool, &new_skill("Go"), "card").await.unwrap();
    assert_eq!(next.id, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn services_keep_json_columns_and_slugs(pool: PgPool) {
    let first = ServiceRepo::create(&pool, &new_service("Audit", &["report"]), "audit")
        .await
        .unwrap();
    let second = ServiceRepo::create(&pool, &new_service("Build", &["api", "ui"]), "build")
        .await
        .unwrap();
    ServiceRepo::delete(&pool, first.id).await.unwrap();

    let plan = MaintenanceRepo::resequence_ids(&pool, "services").await.unwrap();
    assert_eq!(plan, vec![IdMapping { old_id: second.id, new_id: 1 }]);

    let moved = ServiceRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(moved.slug, "build");
    assert_eq!(moved.features.0, vec!["api".to_string(), "ui".to_string()]);
    assert_eq!(moved.starting_price, Some(500.0));

    // The unique slug constraint still holds after the reinsert.
    let duplicate = ServiceRepo::create(&pool, &new_service("Build again", &[]), "build").await;
    assert!(duplicate.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_whitelisted_table_resequences(pool: PgPool) {
    let skill = SkillRepo::create(&pool, &new_skill("Rust"), "card").await.unwrap();
    SkillRepo::create(&pool, &new_skill("Go"), "card").await.unwrap();
    SkillRepo::delete(&pool, skill.id).await.unwrap();
    let service = ServiceRepo::create(&pool, &new_service("Audit", &[]), "audit")
        .await
        .unwrap();
    ServiceRepo::create(&pool, &new_service("Build", &[]), "build")
        .await
        .unwrap();
    ServiceRepo::delete(&pool, service.id).await.unwrap();

    for &table in RESEQUENCABLE_TABLES {
        MaintenanceRepo::resequence_ids(&pool, table).await.unwrap();
        let ids: Vec<i64> = sqlx::query_scalar(&format!("SELECT id FROM {table} ORDER BY id"))
            .fetch_all(&pool)
            .await
            .unwrap();
        let expected: Vec<i64> = (1..=ids.len() as i64).collect();
        assert_eq!(ids, expected, "{table} ids are sequential");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_reinsert_rolls_back_everything(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["Rust", "Go", "SQL"] {
        ids.push(SkillRepo::create(&pool, &new_skill(name), "card").await.unwrap().id);
    }
    SkillRepo::delete(&pool, ids[0]).await.unwrap();
    let before = skill_ids_and_names(&pool).await;

    sqlx::query(
        "CREATE FUNCTION reject_skill_insert() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'skill inserts disabled'; END $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER reject_skill_insert BEFORE INSERT ON skills \
         FOR EACH ROW EXECUTE FUNCTION reject_skill_insert()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = MaintenanceRepo::resequence_ids(&pool, "skills").await;
    assert!(result.is_err());
    assert_eq!(skill_ids_and_names(&pool).await, before);

    sqlx::query("DROP TRIGGER reject_skill_insert ON skills")
        .execute(&pool)
        .await
        .unwrap();

    // The identity restart was rolled back with the truncate.
    let next = SkillRepo::create(&pool, &new_skill("Docker"), "card").await.unwrap();
    assert_eq!(next.id, ids[2] + 1);
}
