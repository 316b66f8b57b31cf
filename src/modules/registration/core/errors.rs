// Error taxonomy for the registry.
//
// Responsibilities
// - ValidationError: a supplied field has the wrong shape or range. Always reported before any
//   existence check of the same call.
// - RegistryError: everything a registry operation can return, validation included.

use crate::shared::core::primitives::{CollegeMemberId, CourseId, CourseSectionRef};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    #[error("invalid email address: {0:?}")]
    InvalidEmailAddress(String),

    #[error("invalid home address: {0}")]
    InvalidHomeAddress(String),

    #[error("date of birth {0} is in the future")]
    DateOfBirthInFuture(NaiveDate),

    #[error("{field} must be a non-negative integer, got {value}")]
    NegativeNumber { field: &'static str, value: i64 },

    #[error("{field} is out of range: {value}")]
    NumberOutOfRange { field: &'static str, value: i64 },

    #[error("{field} must be an integer, got {value}")]
    NotAnInteger { field: &'static str, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("course already exists: {title:?}")]
    CourseAlreadyExists { title: String },

    #[error("course not found: {0}")]
    CourseNotFound(CourseId),

    #[error("college member not found: {0}")]
    CollegeMemberNotFound(CollegeMemberId),

    #[error("course section not found: {0}")]
    CourseSectionNotFound(CourseSectionRef),
}

impl RegistryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }
}
