//! Test fixtures for the ENG parser

mod parser_tests;

/// The reference four-point curve: 90 N·s over 1.5 s
pub fn create_test_eng() -> String {
    "; reference motor\n\
     TestMotor 29 124 5 30 60 TestMfg\n\
     0 0\n\
     0.5 100\n\
     1 80\n\
     1.5 0\n"
        .to_string()
}
