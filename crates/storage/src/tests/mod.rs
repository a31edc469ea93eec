//! Test utilities and module declarations for storage tests.

use chrono::NaiveDate;
use contactbook_core::ContactInput;

pub fn create_test_input(first: &str, last: &str) -> ContactInput {
    ContactInput {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "555-0100".to_owned(),
        birthday: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap_or_default(),
    }
}

mod backend_tests;
