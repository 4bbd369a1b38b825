//! In-memory implementation of [`MemberRepository`].

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::domain::ports::{MemberRepository, MemberRepositoryError};
use crate::domain::{Member, MemberId, Username};

use super::poisoned;

#[derive(Debug, Default)]
struct Table {
    last_id: u64,
    rows: HashMap<Username, Member>,
}

/// Member store held in process memory, keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    table: RwLock<Table>,
}

impl InMemoryMemberRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberRepository for InMemoryMemberRepository {
    fn insert(&self, username: Username, password: String) -> Result<Member, MemberRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|err| MemberRepositoryError::storage(poisoned(err)))?;
        if table.rows.contains_key(&username) {
            return Err(MemberRepositoryError::duplicate(username.to_string()));
        }
        let id = MemberId::new(table.last_id + 1);
        let member = Member::new(id, username.clone(), password)
            .map_err(|err| MemberRepositoryError::storage(err.to_string()))?;
        table.last_id = id.get();
        table.rows.insert(username, member.clone());
        debug!(member_id = %id, "member row inserted");
        Ok(member)
    }

    fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Member>, MemberRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|err| MemberRepositoryError::storage(poisoned(err)))?;
        Ok(table.rows.get(username).cloned())
    }
}
