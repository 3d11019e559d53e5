//! Integration tests for the contact inbox and admin accounts.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use folio_db::models::contact_message::CreateContactMessage;
use folio_db::models::user::CreateUser;
use folio_db::repositories::{ContactMessageRepo, UserRepo};
use sqlx::PgPool;

fn new_message(name: &str) -> CreateContactMessage {
    CreateContactMessage {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: Some("Project inquiry".into()),
        message: "I'd like a quote for a new website.".into(),
    }
}

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$placeholder".to_string(),
        role: "admin".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn read_state_transitions(pool: PgPool) {
    let msg = ContactMessageRepo::create(&pool, &new_message("Ana")).await.unwrap();
    assert!(!msg.is_read);
    assert_eq!(msg.read_at, None);
    assert_eq!(ContactMessageRepo::count_unread(&pool).await.unwrap(), 1);

    let read = ContactMessageRepo::mark_read(&pool, msg.id).await.unwrap().unwrap();
    assert!(read.is_read);
    let first_read_at = read.read_at.expect("read_at stamped");

    let again = ContactMessageRepo::mark_read(&pool, msg.id).await.unwrap().unwrap();
    assert_eq!(again.read_at, Some(first_read_at), "first read time is kept");

    let unread = ContactMessageRepo::mark_unread(&pool, msg.id).await.unwrap().unwrap();
    assert!(!unread.is_read);
    assert_eq!(unread.read_at, None);

    assert!(ContactMessageRepo::mark_read(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inbox_lists_newest_first_and_filters_unread(pool: PgPool) {
    let first = ContactMessageRepo::create(&pool, &new_message("Ana")).await.unwrap();
    let second = ContactMessageRepo::create(&pool, &new_message("Ben")).await.unwrap();
    ContactMessageRepo::mark_read(&pool, first.id).await.unwrap();

    let all = ContactMessageRepo::list(&pool, false, 25, 0).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);

    let unread = ContactMessageRepo::list(&pool, true, 25, 0).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, second.id);

    let page = ContactMessageRepo::list(&pool, false, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, first.id);

    assert!(ContactMessageRepo::delete(&pool, first.id).await.unwrap());
    assert!(!ContactMessageRepo::delete(&pool, first.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("admin")).await.unwrap();
    let mut dup = new_user("admin");
    dup.email = "other@example.com".into();

    let err = UserRepo::create(&pool, &dup).await.unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("uq_users_username")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_bookkeeping(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("admin")).await.unwrap();

    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 1);
    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 2);
    UserRepo::lock_account(&pool, user.id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();

    let locked = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert_eq!(locked.failed_login_count, 2);
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let fresh = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(fresh.failed_login_count, 0);
    assert_eq!(fresh.locked_until, None);
    assert!(fresh.last_login_at.is_some());

    assert!(UserRepo::deactivate(&pool, user.id).await.unwrap());
    let inactive = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(!inactive.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clear_lock_resets_failures(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("admin")).await.unwrap();
    for _ in 0..5 {
        UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    }
    UserRepo::lock_account(&pool, user.id, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    UserRepo::clear_lock(&pool, user.id).await.unwrap();

    let cleared = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(cleared.failed_login_count, 0);
    assert!(cleared.locked_until.is_none());
    assert!(cleared.last_login_at.is_none());
}
