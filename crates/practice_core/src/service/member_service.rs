//! Member use-case service.
//!
//! # Responsibility
//! - Provide member entry points for the web layer and other callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::member::{Member, MemberId};
use crate::repo::member_repo::{MemberRepository, RepoError, RepoResult};
use log::info;

/// Use-case service wrapper for member operations.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a member under a caller-supplied id, replacing any existing row.
    pub fn register(&self, id: MemberId, name: impl Into<String>) -> RepoResult<Member> {
        self.repo.save(&Member::new(id, name))
    }

    /// Stores a member and lets storage assign its id.
    pub fn register_new(&self, name: impl Into<String>) -> RepoResult<Member> {
        self.repo.save(&Member::unsaved(name))
    }

    pub fn get(&self, id: MemberId) -> RepoResult<Option<Member>> {
        self.repo.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<Member>> {
        self.repo.find_by_name(name)
    }

    /// Lists every stored member.
    pub fn list(&self) -> RepoResult<Vec<Member>> {
        self.repo.find_all()
    }

    /// Renames an existing member and saves it.
    ///
    /// # Contract
    /// - Returns `RepoError::NotFound` when `id` is absent.
    /// - The new name is durable once the surrounding unit of work commits
    ///   (or immediately when the repository is not transactional).
    pub fn rename(&self, id: MemberId, new_name: impl Into<String>) -> RepoResult<Member> {
        let mut member = self.repo.find_by_id(id)?.ok_or(RepoError::NotFound(id))?;
        member.change_name(new_name);
        let saved = self.repo.save(&member)?;
        info!("event=member_rename module=service status=ok member_id={id}");
        Ok(saved)
    }

    /// Removes one member. Absent ids are ignored.
    pub fn remove(&self, id: MemberId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }

    /// Removes every member.
    pub fn clear(&self) -> RepoResult<()> {
        self.repo.delete_all()?;
        info!("event=member_clear module=service status=ok");
        Ok(())
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count()
    }
}
