// A person tracked by the registry.
//
// Responsibilities
// - Hold the attributes shared by every member kind, with read-only accessors.
// - Carry the role as a tagged variant so later roles add their own data without touching the base.
//
// Boundaries
// - Members are only created by the registry, which owns id assignment.

use crate::modules::registration::core::address::Address;
use crate::shared::core::primitives::CollegeMemberId;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum MemberKind {
    Student,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollegeMember {
    id: CollegeMemberId,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    email_address: String,
    home_address: Address,
    kind: MemberKind,
}

impl CollegeMember {
    pub(crate) fn student(
        id: CollegeMemberId,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        email_address: String,
        home_address: Address,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            email_address,
            home_address,
            kind: MemberKind::Student,
        }
    }

    pub fn id(&self) -> CollegeMemberId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn home_address(&self) -> &Address {
        &self.home_address
    }

    pub fn kind(&self) -> &MemberKind {
        &self.kind
    }

    pub fn is_student(&self) -> bool {
        matches!(self.kind, MemberKind::Student)
    }
}
