//! Member operations on the ledger

use super::{needle, Ledger};
use crate::{
    error::{AppError, AppResult},
    models::Member,
};

impl Ledger {
    /// Register a new member. Email and phone are stored as given.
    pub fn add_member(&mut self, name: &str, email: &str, phone: &str) -> Member {
        let member = self.insert_member(name, email, phone);
        self.record(format!("Added new member: {}", member.name));
        member
    }

    pub(super) fn insert_member(&mut self, name: &str, email: &str, phone: &str) -> Member {
        let member = Member {
            id: self.next_member_id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };
        self.next_member_id += 1;
        self.members.push(member.clone());
        member
    }

    /// Get member by ID
    pub fn get_member(&self, id: i32) -> AppResult<Member> {
        self.member(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// Members in insertion order, optionally filtered by name or email
    pub fn list_members(&self, keyword: Option<&str>) -> Vec<Member> {
        match needle(keyword) {
            Some(needle) => self
                .members
                .iter()
                .filter(|m| m.matches(&needle))
                .cloned()
                .collect(),
            None => self.members.clone(),
        }
    }

    pub(super) fn member(&self, id: i32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }
}
