// Command data type for adding a student.
//
// Purpose
// - Express the intent to register a new student with their personal data.
//
// Responsibilities
// - Carry input data for the decider to validate.
// - Carry the date the request is made on, so the decider never reads the clock.

use crate::modules::registration::core::address::Address;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudent {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email_address: String,
    pub home_address: Address,
    pub requested_on: NaiveDate,
}
