//! Planning for id resequencing.
//!
//! Deleting catalog rows leaves gaps in their ids. Resequencing rewrites a
//! table so its ids are `1..=n` again, keeping the original row order. The
//! database side lives in `MaintenanceRepo`; this module decides which
//! tables may be rewritten and what each old id becomes.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Tables whose ids may be resequenced. Nothing references their ids by
/// foreign key, so rewriting them is safe.
pub const RESEQUENCABLE_TABLES: &[&str] = &[
    "services",
    "projects",
    "skills",
    "testimonials",
    "experiences",
];

/// Validate that `table` is on the resequencing whitelist.
pub fn validate_table(table: &str) -> Result<&'static str, CoreError> {
    RESEQUENCABLE_TABLES
        .iter()
        .copied()
        .find(|t| *t == table)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Table '{table}' cannot be resequenced. Must be one of: {RESEQUENCABLE_TABLES:?}"
            ))
        })
}

/// How one row's id changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdMapping {
    pub old_id: DbId,
    pub new_id: DbId,
}

/// Map every old id, in ascending order, to its new position `1..=n`.
pub fn plan_resequence(old_ids: &[DbId]) -> Vec<IdMapping> {
    let mut sorted = old_ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
        .into_iter()
        .zip(1..)
        .map(|(old_id, new_id)| IdMapping { old_id, new_id })
        .collect()
}

/// `true` when the ids are already exactly `1..=n` in ascending order.
pub fn is_sequential(ids: &[DbId]) -> bool {
    ids.iter().zip(1..).all(|(id, expected)| *id == expected)
}

/// Only the mappings that actually change an id.
pub fn changed(plan: &[IdMapping]) -> impl Iterator<Item = &IdMapping> {
    plan.iter().filter(|m| m.old_id != m.new_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn whitelisted_tables_accepted() {
        assert_eq!(validate_table("services").unwrap(), "services");
        assert_eq!(validate_table("skills").unwrap(), "skills");
    }

    #[test]
    fn unknown_table_rejected() {
        assert_matches!(validate_table("users"), Err(CoreError::Validation(_)));
        assert!(validate_table("services; DROP TABLE users").is_err());
    }

    #[test]
    fn plan_closes_gaps_in_order() {
        let plan = plan_resequence(&[9, 2, 5]);
        assert_eq!(
            plan,
            vec![
                IdMapping { old_id: 2, new_id: 1 },
                IdMapping { old_id: 5, new_id: 2 },
                IdMapping { old_id: 9, new_id: 3 },
            ]
        );
        assert_eq!(changed(&plan).count(), 3);
    }

    #[test]
    fn plan_of_sequential_ids_changes_nothing() {
        let plan = plan_resequence(&[1, 2, 3]);
        assert_eq!(changed(&plan).count(), 0);
    }

    #[test]
    fn empty_plan() {
        assert!(plan_resequence(&[]).is_empty());
        assert!(is_sequential(&[]));
    }

    #[test]
    fn sequential_detection() {
        assert!(is_sequential(&[1, 2, 3]));
        assert!(!is_sequential(&[1, 3]));
        assert!(!is_sequential(&[2, 3]));
    }
}
