// Command data type for adding a course.
//
// Purpose
// - Express the intent to offer a new course under a unique title.
//
// Responsibilities
// - Carry the credit count as given by the caller; the decider checks its range.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCourse {
    pub title: String,
    pub number_of_credits: i64,
}

impl AddCourse {
    pub fn new(title: impl Into<String>, number_of_credits: i64) -> Self {
        Self {
            title: title.into(),
            number_of_credits,
        }
    }
}
