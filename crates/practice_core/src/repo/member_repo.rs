//! Member repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed CRUD APIs over the `member` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` is insert-or-replace keyed by `id`; the store assigns `id` only
//!   when the record has none.
//! - Lookups report absence as `Ok(None)`, never as an error.
//! - Deletes of absent ids are no-ops.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::member::{Member, MemberId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMBER_SELECT_SQL: &str = "SELECT id, name FROM member";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for member persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(MemberId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "member not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted member data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for member storage.
pub trait MemberRepository {
    /// Inserts or replaces `member` and returns the stored record.
    fn save(&self, member: &Member) -> RepoResult<Member>;
    /// Saves each member in order. Not atomic unless run inside a unit of work.
    fn save_all(&self, members: &[Member]) -> RepoResult<Vec<Member>>;
    fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;
    /// Exact, case-sensitive name match. Which row wins on duplicates is unspecified.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Member>>;
    fn find_all(&self) -> RepoResult<Vec<Member>>;
    fn exists_by_id(&self, id: MemberId) -> RepoResult<bool>;
    fn count(&self) -> RepoResult<u64>;
    fn delete_by_id(&self, id: MemberId) -> RepoResult<()>;
    fn delete_all(&self) -> RepoResult<()>;
}

/// SQLite-backed member repository.
///
/// Borrows either a plain connection or a transaction (through deref), so the
/// same repository runs standalone or inside a `UnitOfWork`.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema is not
    ///   the one this binary expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_member_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn save(&self, member: &Member) -> RepoResult<Member> {
        let id = match member.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO member (id, name) VALUES (?1, ?2)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name;",
                    params![id, member.name.as_str()],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO member (name) VALUES (?1);",
                    [member.name.as_str()],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        Ok(Member {
            id: Some(id),
            name: member.name.clone(),
        })
    }

    fn save_all(&self, members: &[Member]) -> RepoResult<Vec<Member>> {
        members.iter().map(|member| self.save(member)).collect()
    }

    fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE name = ?1 LIMIT 1;"))?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();

        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(members)
    }

    fn exists_by_id(&self, id: MemberId) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM member WHERE id = ?1;", [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM member;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative member count `{count}`")))
    }

    fn delete_by_id(&self, id: MemberId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM member WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM member;", [])?;
        Ok(())
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    let id: MemberId = row.get("id")?;
    let name = row.get::<_, Option<String>>("name")?.ok_or_else(|| {
        RepoError::InvalidData(format!("null name for member {id} in member.name"))
    })?;

    Ok(Member { id: Some(id), name })
}

fn ensure_member_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "member")? {
        return Err(RepoError::MissingRequiredTable("member"));
    }

    for column in ["id", "name"] {
        if !table_has_column(conn, "member", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "member",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
