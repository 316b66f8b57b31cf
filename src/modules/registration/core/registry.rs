// The college registration system: single owner of every member and course.
//
// Responsibilities
// - Assign member and course ids from monotonic counters.
// - Run each write command through its decider before touching any state, so a rejected call
//   never mutates the registry.
// - Resolve ids to entities and report the lookup failures of the error taxonomy.
// - Delegate section creation to the course and roster changes to the section.
//
// Boundaries
// - An explicit value owned by the caller. No global state, no locking.

use crate::modules::registration::core::college_member::CollegeMember;
use crate::modules::registration::core::course::Course;
use crate::modules::registration::core::course_section::{
    CourseSection, DropOutcome, EnrollmentOutcome,
};
use crate::modules::registration::core::errors::RegistryError;
use crate::modules::registration::use_cases::add_course::command::AddCourse;
use crate::modules::registration::use_cases::add_course::decide::decide_add_course;
use crate::modules::registration::use_cases::add_course_section::command::AddCourseSection;
use crate::modules::registration::use_cases::add_course_section::decide::decide_add_course_section;
use crate::modules::registration::use_cases::add_student::command::AddStudent;
use crate::modules::registration::use_cases::add_student::decide::decide_add_student;
use crate::shared::core::primitives::{
    COLLEGE_MEMBER_FIRST_ID, COURSE_FIRST_ID, CollegeMemberId, CourseId, CourseSectionRef,
};
use std::collections::BTreeMap;

/// Ids only grow, so iterating the maps yields entities in creation order.
#[derive(Debug, Clone)]
pub struct CollegeRegistrationSystem {
    college_members: BTreeMap<CollegeMemberId, CollegeMember>,
    courses: BTreeMap<CourseId, Course>,
    next_college_member_id: CollegeMemberId,
    next_course_id: CourseId,
}

impl Default for CollegeRegistrationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CollegeRegistrationSystem {
    pub fn new() -> Self {
        Self {
            college_members: BTreeMap::new(),
            courses: BTreeMap::new(),
            next_college_member_id: COLLEGE_MEMBER_FIRST_ID,
            next_course_id: COURSE_FIRST_ID,
        }
    }

    pub fn add_student(&mut self, command: AddStudent) -> Result<&CollegeMember, RegistryError> {
        let student = decide_add_student(command).inspect_err(|error| {
            tracing::warn!(%error, "rejected student");
        })?;

        let id = self.next_college_member_id;
        self.next_college_member_id = id.next();
        tracing::info!(member_id = %id, email = %student.email_address, "student added");

        let member = CollegeMember::student(
            id,
            student.first_name,
            student.last_name,
            student.date_of_birth,
            student.email_address,
            student.home_address,
        );
        Ok(&*self.college_members.entry(id).or_insert(member))
    }

    pub fn get_college_member(&self, id: CollegeMemberId) -> Result<&CollegeMember, RegistryError> {
        self.college_members
            .get(&id)
            .ok_or(RegistryError::CollegeMemberNotFound(id))
    }

    pub fn college_member_listing(&self) -> Vec<&CollegeMember> {
        self.college_members.values().collect()
    }

    pub fn add_course(&mut self, command: AddCourse) -> Result<&Course, RegistryError> {
        let course = decide_add_course(self.courses.values(), command).inspect_err(|error| {
            tracing::warn!(%error, "rejected course");
        })?;

        let id = self.next_course_id;
        self.next_course_id = id.next();
        tracing::info!(
            course_id = %id,
            title = %course.title,
            credits = course.number_of_credits,
            "course added"
        );

        let course = Course::new(id, course.title, course.number_of_credits);
        Ok(&*self.courses.entry(id).or_insert(course))
    }

    pub fn get_course(&self, id: CourseId) -> Result<&Course, RegistryError> {
        self.courses.get(&id).ok_or(RegistryError::CourseNotFound(id))
    }

    pub fn course_listing(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    /// The cap is validated before the course is looked up.
    pub fn add_course_section(
        &mut self,
        command: AddCourseSection,
    ) -> Result<&CourseSection, RegistryError> {
        let enrollment_cap = decide_add_course_section(&command).inspect_err(|error| {
            tracing::warn!(%error, course_id = %command.course_id, "rejected course section");
        })?;

        let course = self
            .courses
            .get_mut(&command.course_id)
            .ok_or(RegistryError::CourseNotFound(command.course_id))?;
        let section = course.add_course_section(enrollment_cap);
        tracing::info!(section = %section.reference(), enrollment_cap, "course section added");
        Ok(section)
    }

    pub fn get_course_section(
        &self,
        section: CourseSectionRef,
    ) -> Result<&CourseSection, RegistryError> {
        self.get_course(section.course_id)?
            .course_section(section.section_number)
            .ok_or(RegistryError::CourseSectionNotFound(section))
    }

    /// Members of a section's roster, in enrollment order.
    pub fn enrolled_students(
        &self,
        section: CourseSectionRef,
    ) -> Result<Vec<&CollegeMember>, RegistryError> {
        let section = self.get_course_section(section)?;
        Ok(section
            .enrolled_students_listing()
            .iter()
            .filter_map(|id| self.college_members.get(id))
            .collect())
    }

    /// Returns `false` when the section is full or the member already holds a seat.
    pub fn enroll(
        &mut self,
        section: CourseSectionRef,
        member_id: CollegeMemberId,
    ) -> Result<bool, RegistryError> {
        self.get_college_member(member_id)?;
        let outcome = self.course_section_mut(section)?.enroll(member_id);
        match outcome {
            EnrollmentOutcome::Enrolled => {
                tracing::info!(%section, %member_id, "enrolled");
            }
            EnrollmentOutcome::AlreadyEnrolled | EnrollmentOutcome::SectionFull => {
                tracing::debug!(%section, %member_id, ?outcome, "enrollment refused");
            }
        }
        Ok(outcome.is_enrolled())
    }

    pub fn drop(
        &mut self,
        section: CourseSectionRef,
        member_id: CollegeMemberId,
    ) -> Result<bool, RegistryError> {
        self.get_college_member(member_id)?;
        let outcome = self.course_section_mut(section)?.drop(member_id);
        match outcome {
            DropOutcome::Dropped => tracing::info!(%section, %member_id, "dropped"),
            DropOutcome::NotEnrolled => {
                tracing::debug!(%section, %member_id, "drop refused, not enrolled");
            }
        }
        Ok(outcome.is_dropped())
    }

    fn course_section_mut(
        &mut self,
        section: CourseSectionRef,
    ) -> Result<&mut CourseSection, RegistryError> {
        self.courses
            .get_mut(&section.course_id)
            .ok_or(RegistryError::CourseNotFound(section.course_id))?
            .course_section_mut(section.section_number)
            .ok_or(RegistryError::CourseSectionNotFound(section))
    }
}
