// One offering of a course with its own roster.
//
// Responsibilities
// - Keep the roster in enrollment order without duplicates.
// - Never let the roster grow past the enrollment cap, whoever calls enroll.
// - Refer to the owning course, the faculty and the enrolled members by id only.

use crate::shared::core::primitives::{CollegeMemberId, CourseId, CourseSectionRef, SectionNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Enrolled,
    AlreadyEnrolled,
    SectionFull,
}

impl EnrollmentOutcome {
    pub fn is_enrolled(self) -> bool {
        self == EnrollmentOutcome::Enrolled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    NotEnrolled,
}

impl DropOutcome {
    pub fn is_dropped(self) -> bool {
        self == DropOutcome::Dropped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSection {
    course_id: CourseId,
    section_number: SectionNumber,
    enrollment_cap: u32,
    assigned_faculty: Option<CollegeMemberId>,
    enrolled: Vec<CollegeMemberId>,
}

impl CourseSection {
    pub(crate) fn new(
        course_id: CourseId,
        section_number: SectionNumber,
        enrollment_cap: u32,
    ) -> Self {
        Self {
            course_id,
            section_number,
            enrollment_cap,
            assigned_faculty: None,
            enrolled: Vec::new(),
        }
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn section_number(&self) -> SectionNumber {
        self.section_number
    }

    pub fn reference(&self) -> CourseSectionRef {
        CourseSectionRef::new(self.course_id, self.section_number)
    }

    pub fn enrollment_cap(&self) -> u32 {
        self.enrollment_cap
    }

    pub fn assigned_faculty(&self) -> Option<CollegeMemberId> {
        self.assigned_faculty
    }

    pub fn enrolled_students_listing(&self) -> &[CollegeMemberId] {
        &self.enrolled
    }

    pub fn is_enrolled(&self, member_id: CollegeMemberId) -> bool {
        self.enrolled.contains(&member_id)
    }

    pub fn seats_remaining(&self) -> u32 {
        self.enrollment_cap.saturating_sub(self.enrolled.len() as u32)
    }

    pub fn is_full(&self) -> bool {
        self.seats_remaining() == 0
    }

    pub(crate) fn enroll(&mut self, member_id: CollegeMemberId) -> EnrollmentOutcome {
        if self.is_enrolled(member_id) {
            return EnrollmentOutcome::AlreadyEnrolled;
        }
        if self.is_full() {
            return EnrollmentOutcome::SectionFull;
        }
        self.enrolled.push(member_id);
        EnrollmentOutcome::Enrolled
    }

    pub(crate) fn drop(&mut self, member_id: CollegeMemberId) -> DropOutcome {
        match self.enrolled.iter().position(|id| *id == member_id) {
            Some(index) => {
                self.enrolled.remove(index);
                DropOutcome::Dropped
            }
            None => DropOutcome::NotEnrolled,
        }
    }
}

#[cfg(test)]
mod course_section_tests {
    use super::*;
    use rstest::{fixture, rstest};

    const A: CollegeMemberId = CollegeMemberId(1);
    const B: CollegeMemberId = CollegeMemberId(2);
    const C: CollegeMemberId = CollegeMemberId(3);

    #[fixture]
    fn section() -> CourseSection {
        CourseSection::new(CourseId(1), SectionNumber(1), 2)
    }

    #[rstest]
    fn it_should_start_empty_without_faculty(section: CourseSection) {
        assert_eq!(section.assigned_faculty(), None);
        assert!(section.enrolled_students_listing().is_empty());
        assert_eq!(section.seats_remaining(), 2);
        assert_eq!(
            section.reference(),
            CourseSectionRef::new(CourseId(1), SectionNumber(1))
        );
    }

    #[rstest]
    fn it_should_enroll_until_the_cap_is_reached(mut section: CourseSection) {
        assert_eq!(section.enroll(A), EnrollmentOutcome::Enrolled);
        assert_eq!(section.enroll(B), EnrollmentOutcome::Enrolled);
        assert!(section.is_full());
        assert_eq!(section.enroll(C), EnrollmentOutcome::SectionFull);
        assert_eq!(section.enrolled_students_listing(), &[A, B]);
    }

    #[rstest]
    fn it_should_refuse_a_duplicate_enrollment(mut section: CourseSection) {
        assert!(section.enroll(A).is_enrolled());
        assert_eq!(section.enroll(A), EnrollmentOutcome::AlreadyEnrolled);
        assert_eq!(section.enrolled_students_listing(), &[A]);
    }

    #[rstest]
    fn it_should_report_a_duplicate_even_when_full(mut section: CourseSection) {
        section.enroll(A);
        section.enroll(B);
        assert_eq!(section.enroll(B), EnrollmentOutcome::AlreadyEnrolled);
    }

    #[rstest]
    fn it_should_never_enroll_into_a_zero_cap_section() {
        let mut section = CourseSection::new(CourseId(1), SectionNumber(1), 0);
        assert_eq!(section.enroll(A), EnrollmentOutcome::SectionFull);
        assert!(section.enrolled_students_listing().is_empty());
    }

    #[rstest]
    fn it_should_drop_only_enrolled_members(mut section: CourseSection) {
        section.enroll(A);
        section.enroll(B);
        assert_eq!(section.drop(C), DropOutcome::NotEnrolled);
        assert!(section.drop(A).is_dropped());
        assert_eq!(section.enrolled_students_listing(), &[B]);
        assert_eq!(section.drop(A), DropOutcome::NotEnrolled);
    }

    #[rstest]
    fn it_should_free_a_seat_on_drop(mut section: CourseSection) {
        section.enroll(A);
        section.enroll(B);
        section.drop(A);
        assert_eq!(section.enroll(C), EnrollmentOutcome::Enrolled);
        assert_eq!(section.enrolled_students_listing(), &[B, C]);
    }

    #[rstest]
    fn it_should_never_exceed_the_cap_over_any_sequence(mut section: CourseSection) {
        for round in 0..20u64 {
            let member = CollegeMemberId(round % 5);
            if round % 3 == 0 {
                section.drop(member);
            } else {
                section.enroll(member);
            }
            assert!(section.enrolled_students_listing().len() <= section.enrollment_cap() as usize);
        }
    }
}
