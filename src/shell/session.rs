// Session files: a JSON script of students, courses and enrollment steps.
//
// Purpose
// - Drive a registry from plain data, for demos and manual checks.
//
// Responsibilities
// - Keep numeric and address fields untyped until replay, so malformed input is reported through
//   the registry's validation errors instead of a generic parse failure.
// - Resolve students by email address and courses by title when replaying steps.
// - Refuse a second student with the same email address, since steps could not tell them apart.
// - Stop at the first error; nothing after it is applied.

use crate::modules::registration::core::address::Address;
use crate::modules::registration::core::errors::{RegistryError, ValidationError};
use crate::modules::registration::core::registry::CollegeRegistrationSystem;
use crate::modules::registration::use_cases::add_course::command::AddCourse;
use crate::modules::registration::use_cases::add_course_section::command::AddCourseSection;
use crate::modules::registration::use_cases::add_student::command::AddStudent;
use crate::shared::core::primitives::{CollegeMemberId, CourseId, CourseSectionRef, SectionNumber};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed session file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("step {step}: unknown student {email:?}")]
    UnknownStudent { step: usize, email: String },

    #[error("step {step}: unknown course {title:?}")]
    UnknownCourse { step: usize, title: String },

    #[error("duplicate student email {email:?}")]
    DuplicateStudent { email: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentEntry {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email_address: String,
    pub home_address: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseEntry {
    pub title: String,
    pub number_of_credits: Value,
    /// One enrollment cap per section, in section order.
    #[serde(default)]
    pub sections: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Enroll {
        course: String,
        section: u32,
        student: String,
    },
    Drop {
        course: String,
        section: u32,
        student: String,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// What a replayed step returned from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub accepted: bool,
}

impl Session {
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Applies the session in order: students, then courses with their sections, then steps.
pub fn replay(
    session: &Session,
    registry: &mut CollegeRegistrationSystem,
    today: NaiveDate,
) -> Result<Vec<StepOutcome>, SessionError> {
    let mut students: HashMap<&str, CollegeMemberId> = HashMap::new();
    for entry in &session.students {
        if students.contains_key(entry.email_address.as_str()) {
            return Err(SessionError::DuplicateStudent {
                email: entry.email_address.clone(),
            });
        }
        let command = AddStudent {
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            date_of_birth: entry.date_of_birth,
            email_address: entry.email_address.clone(),
            home_address: Address::from_json(&entry.home_address)
                .map_err(RegistryError::from)?,
            requested_on: today,
        };
        let id = registry.add_student(command)?.id();
        students.insert(entry.email_address.as_str(), id);
    }

    let mut courses: HashMap<&str, CourseId> = HashMap::new();
    for entry in &session.courses {
        let credits = integer("number_of_credits", &entry.number_of_credits)?;
        let course_id = registry
            .add_course(AddCourse::new(entry.title.clone(), credits))?
            .id();
        courses.insert(entry.title.as_str(), course_id);
        for cap in &entry.sections {
            let cap = integer("enrollment_cap", cap)?;
            registry.add_course_section(AddCourseSection::new(course_id, cap))?;
        }
    }

    let mut outcomes = Vec::with_capacity(session.steps.len());
    for (index, step) in session.steps.iter().enumerate() {
        let step_number = index + 1;
        let (course, section, student) = match step {
            Step::Enroll {
                course,
                section,
                student,
            }
            | Step::Drop {
                course,
                section,
                student,
            } => (course, *section, student),
        };
        let course_id = *courses
            .get(course.as_str())
            .ok_or_else(|| SessionError::UnknownCourse {
                step: step_number,
                title: course.clone(),
            })?;
        let member_id = *students
            .get(student.as_str())
            .ok_or_else(|| SessionError::UnknownStudent {
                step: step_number,
                email: student.clone(),
            })?;
        let section = CourseSectionRef::new(course_id, SectionNumber(section));

        let accepted = match step {
            Step::Enroll { .. } => registry.enroll(section, member_id)?,
            Step::Drop { .. } => registry.drop(section, member_id)?,
        };
        tracing::debug!(step_number, ?step, accepted, "step replayed");
        outcomes.push(StepOutcome {
            step: step.clone(),
            accepted,
        });
    }
    Ok(outcomes)
}

fn integer(field: &'static str, value: &Value) -> Result<i64, RegistryError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    let error = match value.as_u64() {
        Some(n) => ValidationError::NumberOutOfRange {
            field,
            value: i64::try_from(n).unwrap_or(i64::MAX),
        },
        None => ValidationError::NotAnInteger {
            field,
            value: value.to_string(),
        },
    };
    Err(error.into())
}
