// Pure decision function for adding a course.
//
// Responsibilities
// - Enforce rules in order: title must not be blank, credits must be a non-negative integer,
//   and only then the title must not be taken by an existing course.
// - Never perform input or output.

use crate::modules::registration::core::course::Course;
use crate::modules::registration::core::errors::{RegistryError, ValidationError};
use crate::modules::registration::use_cases::add_course::command::AddCourse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub number_of_credits: u32,
}

pub fn decide_add_course<'a>(
    existing: impl IntoIterator<Item = &'a Course>,
    command: AddCourse,
) -> Result<NewCourse, RegistryError> {
    if command.title.trim().is_empty() {
        return Err(ValidationError::BlankField { field: "title" }.into());
    }
    let number_of_credits = non_negative_u32("number_of_credits", command.number_of_credits)?;

    if existing
        .into_iter()
        .any(|course| course.title() == command.title)
    {
        return Err(RegistryError::CourseAlreadyExists {
            title: command.title,
        });
    }

    Ok(NewCourse {
        title: command.title,
        number_of_credits,
    })
}

/// Shared by every command that carries a count.
pub(crate) fn non_negative_u32(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeNumber { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::NumberOutOfRange { field, value })
}
