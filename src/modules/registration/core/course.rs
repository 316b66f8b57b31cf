// A credited subject and the sections that offer it.
//
// Responsibilities
// - Own the sections in creation order, so position and section number always agree.
// - Hand out the next section number when the registry adds a section.

use crate::modules::registration::core::course_section::CourseSection;
use crate::shared::core::primitives::{CourseId, SectionNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    number_of_credits: u32,
    sections: Vec<CourseSection>,
}

impl Course {
    pub(crate) fn new(id: CourseId, title: String, number_of_credits: u32) -> Self {
        Self {
            id,
            title,
            number_of_credits,
            sections: Vec::new(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn number_of_credits(&self) -> u32 {
        self.number_of_credits
    }

    pub fn course_section_listing(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn course_section(&self, section_number: SectionNumber) -> Option<&CourseSection> {
        self.sections.get(section_number.index()?)
    }

    pub(crate) fn course_section_mut(
        &mut self,
        section_number: SectionNumber,
    ) -> Option<&mut CourseSection> {
        self.sections.get_mut(section_number.index()?)
    }

    pub(crate) fn add_course_section(&mut self, enrollment_cap: u32) -> &CourseSection {
        let section_number = SectionNumber::after(self.sections.len());
        self.sections
            .push(CourseSection::new(self.id, section_number, enrollment_cap));
        &self.sections[self.sections.len() - 1]
    }
}
