// Pure validation for adding a student.
//
// Responsibilities
// - Check each field of the command against its expected shape, in declaration order.
// - Return the fields exactly as given on success. Id assignment stays with the registry.
// - Never perform input or output.

use crate::modules::registration::core::address::Address;
use crate::modules::registration::core::errors::ValidationError;
use crate::modules::registration::use_cases::add_student::command::AddStudent;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email_address: String,
    pub home_address: Address,
}

pub fn decide_add_student(command: AddStudent) -> Result<NewStudent, ValidationError> {
    let first_name = non_blank("first_name", command.first_name)?;
    let last_name = non_blank("last_name", command.last_name)?;
    if command.date_of_birth > command.requested_on {
        return Err(ValidationError::DateOfBirthInFuture(command.date_of_birth));
    }
    let email_address = non_blank("email_address", command.email_address)?;
    if !is_email_address(&email_address) {
        return Err(ValidationError::InvalidEmailAddress(email_address));
    }
    command.home_address.validate()?;

    Ok(NewStudent {
        first_name,
        last_name,
        date_of_birth: command.date_of_birth,
        email_address,
        home_address: command.home_address,
    })
}

fn non_blank(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(value)
}

fn is_email_address(value: &str) -> bool {
    let Some((local, domain)) = value.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.chars().any(char::is_whitespace)
        && !domain.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
