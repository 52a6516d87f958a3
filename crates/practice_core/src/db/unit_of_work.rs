//! Scoped unit of work over one SQLite transaction.
//!
//! # Responsibility
//! - Group member mutations so they become durable together.
//! - Make the commit boundary explicit in caller code.
//!
//! # Invariants
//! - Nothing written through a unit of work is visible to other connections
//!   before `commit`.
//! - A unit of work that is dropped without `commit` rolls back.

use super::DbResult;
use crate::repo::member_repo::{RepoResult, SqliteMemberRepository};
use log::{debug, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// An open transaction that must be committed to persist its writes.
pub struct UnitOfWork<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> UnitOfWork<'conn> {
    /// Starts an immediate transaction on `conn`.
    ///
    /// Immediate mode takes the write lock up front, so a later write inside
    /// the unit cannot fail with `SQLITE_BUSY` halfway through.
    pub fn begin(conn: &'conn mut Connection) -> DbResult<Self> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        debug!("event=uow_begin module=db status=ok");
        Ok(Self { tx })
    }

    /// Connection view scoped to this transaction.
    pub fn connection(&self) -> &Connection {
        &self.tx
    }

    /// Member repository whose reads and writes run inside this transaction.
    pub fn members(&self) -> RepoResult<SqliteMemberRepository<'_>> {
        SqliteMemberRepository::try_new(&self.tx)
    }

    /// Makes every write of this unit durable.
    pub fn commit(self) -> DbResult<()> {
        self.tx.commit()?;
        debug!("event=uow_commit module=db status=ok");
        Ok(())
    }

    /// Discards every write of this unit.
    pub fn rollback(self) -> DbResult<()> {
        self.tx.rollback()?;
        debug!("event=uow_rollback module=db status=ok");
        Ok(())
    }
}

/// Runs `work` inside a unit of work.
///
/// Commits when `work` returns `Ok`; rolls back and returns the error
/// unchanged when it returns `Err`.
pub fn in_unit_of_work<T, E, F>(conn: &mut Connection, work: F) -> Result<T, E>
where
    F: FnOnce(&Connection) -> Result<T, E>,
    E: From<super::DbError>,
{
    let unit = UnitOfWork::begin(conn)?;
    match work(unit.connection()) {
        Ok(value) => {
            unit.commit()?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = unit.rollback() {
                warn!(
                    "event=uow_rollback module=db status=error error={}",
                    rollback_err
                );
            }
            Err(err)
        }
    }
}
