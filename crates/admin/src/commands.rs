//! Subcommand definitions and their implementations.

use anyhow::{bail, Context};
use clap::Subcommand;
use folio_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use folio_core::resequence::{changed, validate_table, RESEQUENCABLE_TABLES};
use folio_core::roles::{ROLE_ADMIN, VALID_ROLES};
use folio_db::models::user::CreateUser;
use folio_db::repositories::{MaintenanceRepo, UserRepo};
use folio_db::DbPool;
use validator::ValidateEmail;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Renumber a catalog table's ids to 1..n, keeping row order.
    Resequence {
        /// Table to resequence.
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        table: Option<String>,
        /// Resequence every catalog table.
        #[arg(long)]
        all: bool,
    },
    /// Create a login account for the admin panel.
    CreateUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// `admin` or `editor`.
        #[arg(long, default_value = ROLE_ADMIN)]
        role: String,
    },
}

pub async fn execute(pool: &DbPool, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Resequence { table, all } => {
            let tables: Vec<&'static str> = if all {
                RESEQUENCABLE_TABLES.to_vec()
            } else {
                let name = table.unwrap_or_default();
                vec![validate_table(&name)?]
            };
            for table in tables {
                resequence(pool, table).await?;
            }
            Ok(())
        }
        Command::CreateUser {
            username,
            email,
            password,
            role,
        } => create_user(pool, username, email, &password, role).await,
    }
}

async fn resequence(pool: &DbPool, table: &'static str) -> anyhow::Result<()> {
    let plan = MaintenanceRepo::resequence_ids(pool, table)
        .await
        .with_context(|| format!("Failed to resequence {table}"))?;

    let moved: Vec<_> = changed(&plan).collect();
    if moved.is_empty() {
        println!("{table}: ids already sequential");
        return Ok(());
    }

    println!("{table}: {} of {} ids renumbered", moved.len(), plan.len());
    for mapping in moved {
        println!("  {} -> {}", mapping.old_id, mapping.new_id);
    }
    Ok(())
}

async fn create_user(
    pool: &DbPool,
    username: String,
    email: String,
    password: &str,
    role: String,
) -> anyhow::Result<()> {
    check_account_input(&username, &email, &role)?;
    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(anyhow::Error::msg)?;

    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    let input = CreateUser {
        username,
        email,
        password_hash,
        role,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .context("Failed to create user")?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");
    println!("Created {} '{}' (id {})", user.role, user.username, user.id);
    Ok(())
}

fn check_account_input(username: &str, email: &str, role: &str) -> anyhow::Result<()> {
    if username.trim().is_empty() {
        bail!("Username must not be blank");
    }
    if !email.validate_email() {
        bail!("'{email}' is not a valid email address");
    }
    if !VALID_ROLES.contains(&role) {
        bail!("Invalid role '{role}'. Must be one of: {VALID_ROLES:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_input_checks() {
        assert!(check_account_input("owner", "owner@example.com", "admin").is_ok());
        assert!(check_account_input("writer", "w@example.com", "editor").is_ok());
        assert!(check_account_input(" ", "owner@example.com", "admin").is_err());
        assert!(check_account_input("owner", "nope", "admin").is_err());
        assert!(check_account_input("owner", "owner@example.com", "root").is_err());
    }
}
