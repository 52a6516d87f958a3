//! Member store schema versions.
//!
//! # Responsibility
//! - List schema steps for the `member` table in version order.
//! - Bring a connection up to `latest_version()`, one committed step at a time.
//!
//! # Invariants
//! - Versions are strictly increasing and start at 1.
//! - `PRAGMA user_version` always names the last step that committed.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// One schema step.
#[derive(Debug, Clone, Copy)]
pub struct SchemaStep {
    pub version: u32,
    pub name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "member",
    sql: include_str!("0001_member.sql"),
}];

/// Returns the newest schema version this binary can open.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Returns the steps a store at `version` still needs.
pub fn pending_steps(version: u32) -> impl Iterator<Item = &'static SchemaStep> {
    SCHEMA_STEPS.iter().filter(move |step| step.version > version)
}

/// Upgrades `conn` to `latest_version()` and returns how many steps ran.
///
/// Each step commits on its own, so a failing step leaves the store at the
/// previous version rather than half-applied.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<usize> {
    let found = current_user_version(conn)?;
    let latest = latest_version();
    if found > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: latest,
        });
    }

    let mut applied = 0;
    for step in pending_steps(found) {
        let tx = conn.transaction()?;
        tx.execute_batch(step.sql)
            .map_err(|source| DbError::SchemaStep {
                version: step.version,
                name: step.name,
                source,
            })?;
        tx.pragma_update(None, "user_version", step.version)?;
        tx.commit()?;
        applied += 1;
        info!(
            "event=db_migrate module=db status=ok version={} step={}",
            step.version, step.name
        );
    }

    Ok(applied)
}

/// Reads the schema version recorded on the connection.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, current_user_version, latest_version, pending_steps};
    use rusqlite::Connection;

    #[test]
    fn pending_steps_shrink_as_version_grows() {
        assert_eq!(pending_steps(0).count(), 1);
        assert_eq!(pending_steps(latest_version()).count(), 0);
    }

    #[test]
    fn apply_runs_each_step_once() {
        let mut conn = Connection::open_in_memory().expect("in-memory db should open");

        assert_eq!(apply_migrations(&mut conn).expect("first run should apply"), 1);
        assert_eq!(apply_migrations(&mut conn).expect("second run is a no-op"), 0);
        assert_eq!(
            current_user_version(&conn).expect("version should read"),
            latest_version()
        );
    }

    #[test]
    fn failing_step_reports_its_version_and_keeps_store_unversioned() {
        let mut conn = Connection::open_in_memory().expect("in-memory db should open");
        conn.execute_batch("CREATE VIEW member AS SELECT 1 AS id;")
            .expect("conflicting view should be created");

        let err = apply_migrations(&mut conn).expect_err("step should fail on name clash");

        assert!(matches!(
            err,
            crate::db::DbError::SchemaStep {
                version: 1,
                name: "member",
                ..
            }
        ));
        assert_eq!(current_user_version(&conn).expect("version should read"), 0);
    }
}
