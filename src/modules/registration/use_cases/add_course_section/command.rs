// Command data type for adding a section to an existing course.

use crate::shared::core::primitives::CourseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddCourseSection {
    pub course_id: CourseId,
    pub enrollment_cap: i64,
}

impl AddCourseSection {
    pub fn new(course_id: CourseId, enrollment_cap: i64) -> Self {
        Self {
            course_id,
            enrollment_cap,
        }
    }
}
