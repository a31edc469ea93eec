//! Fixed demo data for `serve --seed-demo` and `list`.

use chrono::NaiveDate;
use contactbook_core::ContactInput;

const DEMO: &[(&str, &str, &str, &str, (i32, u32, u32))] = &[
    ("Ada", "Lovelace", "ada@example.com", "555-0101", (1815, 12, 10)),
    ("Alan", "Turing", "alan@example.com", "555-0102", (1912, 6, 23)),
    ("Grace", "Hopper", "grace@example.com", "555-0103", (1906, 12, 9)),
    ("Edsger", "Dijkstra", "edsger@example.com", "555-0104", (1930, 5, 11)),
    ("Barbara", "Liskov", "barbara@example.com", "555-0105", (1939, 11, 7)),
    ("Donald", "Knuth", "donald@example.com", "555-0106", (1938, 1, 10)),
    ("Margaret", "Hamilton", "margaret@example.com", "555-0107", (1936, 8, 17)),
    ("Ken", "Thompson", "ken@example.com", "555-0108", (1943, 2, 4)),
    ("Dennis", "Ritchie", "dennis@example.com", "555-0109", (1941, 9, 9)),
    ("Frances", "Allen", "frances@example.com", "555-0110", (1932, 8, 4)),
    ("John", "Backus", "john@example.com", "555-0111", (1924, 12, 3)),
    ("Radia", "Perlman", "radia@example.com", "555-0112", (1951, 12, 18)),
];

pub(crate) fn demo_contacts() -> Vec<ContactInput> {
    DEMO.iter()
        .filter_map(|&(first, last, email, phone, (y, m, d))| {
            Some(ContactInput {
                first_name: first.to_owned(),
                last_name: last.to_owned(),
                email: email.to_owned(),
                phone: phone.to_owned(),
                birthday: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
}
