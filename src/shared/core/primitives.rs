// Identifiers shared by every registration entity.
//
// Purpose
// - Give each kind of id its own type so a course id can never be passed where a member id is
//   expected.
//
// Responsibilities
// - Define the first value handed out by the registry for each counter.
// - Provide the composite reference used to address one course section.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const COLLEGE_MEMBER_FIRST_ID: CollegeMemberId = CollegeMemberId(1);
pub const COURSE_FIRST_ID: CourseId = CourseId(1);
pub const SECTION_FIRST_NUMBER: SectionNumber = SectionNumber(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollegeMemberId(pub u64);

impl CollegeMemberId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CollegeMemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl CourseId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based position of a section within its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionNumber(pub u32);

impl SectionNumber {
    /// Section number for the section appended after `existing` sections.
    pub fn after(existing: usize) -> Self {
        Self(SECTION_FIRST_NUMBER.0 + existing as u32)
    }

    pub(crate) fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(SECTION_FIRST_NUMBER.0 as usize)
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addresses one section: the owning course plus its section number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseSectionRef {
    pub course_id: CourseId,
    pub section_number: SectionNumber,
}

impl CourseSectionRef {
    pub fn new(course_id: CourseId, section_number: SectionNumber) -> Self {
        Self {
            course_id,
            section_number,
        }
    }
}

impl fmt::Display for CourseSectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course {} section {}", self.course_id, self.section_number)
    }
}
