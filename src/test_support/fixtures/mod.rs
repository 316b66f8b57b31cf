pub mod commands {
    pub mod add_student;
}
