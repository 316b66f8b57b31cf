// Read model of a registry, shaped for serialization.
//
// Purpose
// - Give callers an owned, serializable picture of the registry at one point in time.
//
// Responsibilities
// - Map entities to flat views, keeping creation order for members, courses and sections.
// - Resolve section rosters to member ids only; views never borrow from the registry.

use crate::modules::registration::core::address::Address;
use crate::modules::registration::core::college_member::{CollegeMember, MemberKind};
use crate::modules::registration::core::course::Course;
use crate::modules::registration::core::course_section::CourseSection;
use crate::modules::registration::core::registry::CollegeRegistrationSystem;
use crate::shared::core::primitives::{CollegeMemberId, CourseId, SectionNumber};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollegeMemberView {
    pub id: CollegeMemberId,
    pub kind: MemberKind,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email_address: String,
    pub home_address: Address,
}

impl From<&CollegeMember> for CollegeMemberView {
    fn from(m: &CollegeMember) -> Self {
        Self {
            id: m.id(),
            kind: m.kind().clone(),
            first_name: m.first_name().to_string(),
            last_name: m.last_name().to_string(),
            date_of_birth: m.date_of_birth(),
            email_address: m.email_address().to_string(),
            home_address: m.home_address().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSectionView {
    pub section_number: SectionNumber,
    pub enrollment_cap: u32,
    pub seats_remaining: u32,
    pub assigned_faculty: Option<CollegeMemberId>,
    pub enrolled: Vec<CollegeMemberId>,
}

impl From<&CourseSection> for CourseSectionView {
    fn from(s: &CourseSection) -> Self {
        Self {
            section_number: s.section_number(),
            enrollment_cap: s.enrollment_cap(),
            seats_remaining: s.seats_remaining(),
            assigned_faculty: s.assigned_faculty(),
            enrolled: s.enrolled_students_listing().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub id: CourseId,
    pub title: String,
    pub number_of_credits: u32,
    pub sections: Vec<CourseSectionView>,
}

impl From<&Course> for CourseView {
    fn from(c: &Course) -> Self {
        Self {
            id: c.id(),
            title: c.title().to_string(),
            number_of_credits: c.number_of_credits(),
            sections: c.course_section_listing().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub college_members: Vec<CollegeMemberView>,
    pub courses: Vec<CourseView>,
}

impl From<&CollegeRegistrationSystem> for RegistrySnapshot {
    fn from(registry: &CollegeRegistrationSystem) -> Self {
        Self {
            college_members: registry
                .college_member_listing()
                .into_iter()
                .map(Into::into)
                .collect(),
            courses: registry.course_listing().into_iter().map(Into::into).collect(),
        }
    }
}
