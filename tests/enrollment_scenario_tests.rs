// End-to-end enrollment flows through the public registry API.
//
// Responsibilities
// - Walk the capacity scenario: fill a two-seat section, get refused, drop, re-enroll.
// - Replay the bundled demo session and check the final rosters.

use chrono::NaiveDate;
use college_registration::modules::registration::core::address::Address;
use college_registration::modules::registration::core::college_member::CollegeMember;
use college_registration::modules::registration::core::registry::CollegeRegistrationSystem;
use college_registration::modules::registration::projection::snapshot::RegistrySnapshot;
use college_registration::modules::registration::use_cases::{
    add_course::command::AddCourse, add_course_section::command::AddCourseSection,
    add_student::command::AddStudent,
};
use college_registration::shared::core::primitives::{CollegeMemberId, CourseSectionRef};
use college_registration::shell::session::{Session, replay};
use rstest::{fixture, rstest};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn add_student(registry: &mut CollegeRegistrationSystem, first_name: &str) -> CollegeMemberId {
    let command = AddStudent {
        first_name: first_name.to_string(),
        last_name: "Student".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2005, 3, 14).unwrap(),
        email_address: format!("{}@college.edu", first_name.to_lowercase()),
        home_address: Address::new("12 Elm Street", "Springfield", "IL", "62704", "USA"),
        requested_on: today(),
    };
    registry.add_student(command).unwrap().id()
}

struct Scenario {
    registry: CollegeRegistrationSystem,
    section: CourseSectionRef,
    a: CollegeMemberId,
    b: CollegeMemberId,
    c: CollegeMemberId,
}

impl Scenario {
    fn roster(&self) -> Vec<CollegeMemberId> {
        self.registry
            .enrolled_students(self.section)
            .unwrap()
            .into_iter()
            .map(CollegeMember::id)
            .collect()
    }
}

#[fixture]
fn scenario() -> Scenario {
    let mut registry = CollegeRegistrationSystem::new();
    let course_id = registry.add_course(AddCourse::new("CS101", 3)).unwrap().id();
    let section = registry
        .add_course_section(AddCourseSection::new(course_id, 2))
        .unwrap()
        .reference();
    let a = add_student(&mut registry, "A");
    let b = add_student(&mut registry, "B");
    let c = add_student(&mut registry, "C");
    Scenario {
        registry,
        section,
        a,
        b,
        c,
    }
}

#[rstest]
fn enrollment_respects_the_cap_and_frees_seats_on_drop(mut scenario: Scenario) {
    let section = scenario.section;
    let (a, b, c) = (scenario.a, scenario.b, scenario.c);

    assert_eq!(scenario.registry.enroll(section, a), Ok(true));
    assert_eq!(scenario.roster(), vec![a]);

    assert_eq!(scenario.registry.enroll(section, b), Ok(true));
    assert_eq!(scenario.roster(), vec![a, b]);

    assert_eq!(scenario.registry.enroll(section, c), Ok(false));
    assert_eq!(scenario.roster(), vec![a, b]);

    assert_eq!(scenario.registry.drop(section, a), Ok(true));
    assert_eq!(scenario.roster(), vec![b]);

    assert_eq!(scenario.registry.enroll(section, c), Ok(true));
    assert_eq!(scenario.roster(), vec![b, c]);
}

#[rstest]
fn drop_reports_whether_the_member_held_a_seat(mut scenario: Scenario) {
    let section = scenario.section;
    assert_eq!(scenario.registry.drop(section, scenario.a), Ok(false));
    scenario.registry.enroll(section, scenario.a).unwrap();
    assert_eq!(scenario.registry.drop(section, scenario.a), Ok(true));
    assert_eq!(scenario.registry.drop(section, scenario.a), Ok(false));
    assert!(scenario.roster().is_empty());
}

#[rstest]
fn replaying_the_demo_session_builds_the_expected_registry() {
    let raw = include_str!("../demos/cs101_session.json");
    let session = Session::from_json(raw).unwrap();
    let mut registry = CollegeRegistrationSystem::new();

    let outcomes = replay(&session, &mut registry, today()).unwrap();
    let accepted: Vec<bool> = outcomes.iter().map(|o| o.accepted).collect();
    assert_eq!(accepted, vec![true, true, false, true, true, true]);

    let snapshot = RegistrySnapshot::from(&registry);
    assert_eq!(snapshot.college_members.len(), 3);
    let titles: Vec<&str> = snapshot.courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["CS101", "MATH201"]);

    let cs101 = &snapshot.courses[0].sections[0];
    assert_eq!(cs101.enrolled, vec![CollegeMemberId(2), CollegeMemberId(3)]);
    assert_eq!(cs101.seats_remaining, 0);

    let math = &snapshot.courses[1].sections;
    assert!(math[0].enrolled.is_empty());
    assert_eq!(math[1].enrolled, vec![CollegeMemberId(1)]);
}
