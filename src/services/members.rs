//! Member registry service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, MemberQuery},
};

use super::SharedLedger;

#[derive(Clone)]
pub struct MembersService {
    ledger: SharedLedger,
}

impl MembersService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    pub async fn search_members(&self, query: &MemberQuery) -> Vec<Member> {
        self.ledger.read().await.list_members(query.q.as_deref())
    }

    /// Get member by ID
    pub async fn get_member(&self, id: i32) -> AppResult<Member> {
        self.ledger.read().await.get_member(id)
    }

    /// Register a new member
    pub async fn create_member(&self, member: CreateMember) -> Member {
        let created = self
            .ledger
            .write()
            .await
            .add_member(&member.name, &member.email, &member.phone);
        tracing::info!(member_id = created.id, "Member added");
        created
    }
}
