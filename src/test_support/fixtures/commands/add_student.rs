// Shared test fixture for the AddStudent command.
// Compiled only for tests; the defaults come from json/add_student.json.

use crate::modules::registration::core::address::Address;
use crate::modules::registration::use_cases::add_student::command::AddStudent;
use chrono::NaiveDate;
use serde::Deserialize;

const ADD_STUDENT_JSON: &str = include_str!("json/add_student.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email_address: String,
    pub home_address: Address,
}

pub fn requested_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

#[derive(Debug, Clone)]
pub struct AddStudentBuilder {
    inner: AddStudent,
}

impl Default for AddStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddStudentBuilder {
    pub fn new() -> Self {
        let dto: AddStudentDto = serde_json::from_str(ADD_STUDENT_JSON).unwrap();

        Self {
            inner: AddStudent {
                first_name: dto.first_name,
                last_name: dto.last_name,
                date_of_birth: dto.date_of_birth,
                email_address: dto.email_address,
                home_address: dto.home_address,
                requested_on: requested_on(),
            },
        }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn date_of_birth(mut self, v: NaiveDate) -> Self {
        self.inner.date_of_birth = v;
        self
    }

    pub fn email_address(mut self, v: impl Into<String>) -> Self {
        self.inner.email_address = v.into();
        self
    }

    pub fn home_address(mut self, v: Address) -> Self {
        self.inner.home_address = v;
        self
    }

    pub fn requested_on(mut self, v: NaiveDate) -> Self {
        self.inner.requested_on = v;
        self
    }

    pub fn build(self) -> AddStudent {
        self.inner
    }
}

#[cfg(test)]
mod add_student_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddStudentBuilder::default().build();
        assert_eq!(built.first_name, "Ada");
        assert_eq!(built.last_name, "Lovelace");
        assert_eq!(
            built.date_of_birth,
            NaiveDate::from_ymd_opt(2004, 12, 10).unwrap()
        );
        assert_eq!(built.email_address, "ada.lovelace@college.edu");
        assert_eq!(built.home_address.postal_code, "62704");
        assert_eq!(built.requested_on, requested_on());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let dob = NaiveDate::from_ymd_opt(2001, 1, 2).unwrap();
        let on = NaiveDate::from_ymd_opt(2030, 3, 4).unwrap();
        let address = Address::new("1 Main St", "Shelbyville", "IL", "62565", "USA");
        let custom = AddStudentBuilder::new()
            .first_name("Grace")
            .last_name("Hopper")
            .date_of_birth(dob)
            .email_address("grace@college.edu")
            .home_address(address.clone())
            .requested_on(on)
            .build();

        assert_eq!(custom.first_name, "Grace");
        assert_eq!(custom.last_name, "Hopper");
        assert_eq!(custom.date_of_birth, dob);
        assert_eq!(custom.email_address, "grace@college.edu");
        assert_eq!(custom.home_address, address);
        assert_eq!(custom.requested_on, on);
    }
}
