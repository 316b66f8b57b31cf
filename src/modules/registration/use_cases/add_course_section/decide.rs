// Pure validation for adding a course section.
//
// Responsibilities
// - Check the enrollment cap is a non-negative integer that fits a section roster.
// - Runs before the registry resolves the course, so a malformed cap is reported even for an
//   unknown course.

use crate::modules::registration::core::errors::ValidationError;
use crate::modules::registration::use_cases::add_course::decide::non_negative_u32;
use crate::modules::registration::use_cases::add_course_section::command::AddCourseSection;

pub fn decide_add_course_section(command: &AddCourseSection) -> Result<u32, ValidationError> {
    non_negative_u32("enrollment_cap", command.enrollment_cap)
}

#[cfg(test)]
mod add_course_section_decide_tests {
    use super::*;
    use crate::shared::core::primitives::CourseId;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(250)]
    fn it_should_accept_a_non_negative_cap(#[case] cap: i64) {
        let command = AddCourseSection::new(CourseId(1), cap);
        assert_eq!(decide_add_course_section(&command), Ok(cap as u32));
    }

    #[rstest]
    fn it_should_decide_that_a_negative_cap_is_invalid() {
        let command = AddCourseSection::new(CourseId(1), -5);
        assert_eq!(
            decide_add_course_section(&command),
            Err(ValidationError::NegativeNumber {
                field: "enrollment_cap",
                value: -5
            })
        );
    }

    #[rstest]
    fn it_should_decide_that_an_oversized_cap_is_invalid() {
        let command = AddCourseSection::new(CourseId(1), i64::MAX);
        assert_eq!(
            decide_add_course_section(&command),
            Err(ValidationError::NumberOutOfRange {
                field: "enrollment_cap",
                value: i64::MAX
            })
        );
    }
}
