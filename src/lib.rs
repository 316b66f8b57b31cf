// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod address;
            pub mod college_member;
            pub mod course;
            pub mod course_section;
            pub mod errors;
            pub mod registry;
        }
        pub mod use_cases {
            pub mod add_student {
                pub mod command;
                pub mod decide;
            }
            pub mod add_course {
                pub mod command;
                pub mod decide;
            }
            pub mod add_course_section {
                pub mod command;
                pub mod decide;
            }
        }
        pub mod projection {
            pub mod snapshot;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
