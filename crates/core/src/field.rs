//! Record schema: resolving untrusted field names and comparing by field.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::contact::Contact;
use crate::error::QueryError;

/// A record the query pipeline can filter and sort.
pub trait Queryable {
    /// Resolved schema attribute. Parsing an unknown name must fail with
    /// [`QueryError::UnknownField`].
    type Field: FromStr<Err = QueryError> + Copy;

    /// String form used by equality filtering.
    fn field_text(&self, field: Self::Field) -> Cow<'_, str>;

    /// Ordering of `self` relative to `other` on a single field.
    fn compare_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Attributes of a [`Contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Birthday,
}

impl ContactField {
    pub const ALL: [Self; 6] =
        [Self::Id, Self::FirstName, Self::LastName, Self::Email, Self::Phone, Self::Birthday];

    /// Wire (JSON) name.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }
}

impl FromStr for ContactField {
    type Err = QueryError;

    /// Case-insensitive; `_` and `-` are ignored so `last_name` and `lastName` agree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String =
            s.chars().filter(|c| *c != '_' && *c != '-').flat_map(char::to_lowercase).collect();
        match folded.as_str() {
            "id" => Ok(Self::Id),
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "birthday" => Ok(Self::Birthday),
            _ => Err(QueryError::unknown_field(s)),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}

impl Queryable for Contact {
    type Field = ContactField;

    fn field_text(&self, field: ContactField) -> Cow<'_, str> {
        match field {
            ContactField::Id => Cow::Owned(self.id.to_string()),
            ContactField::FirstName => Cow::Borrowed(&self.first_name),
            ContactField::LastName => Cow::Borrowed(&self.last_name),
            ContactField::Email => Cow::Borrowed(&self.email),
            ContactField::Phone => Cow::Borrowed(&self.phone),
            ContactField::Birthday => Cow::Owned(self.birthday.format("%Y-%m-%d").to_string()),
        }
    }

    fn compare_field(&self, other: &Self, field: ContactField) -> Ordering {
        match field {
            ContactField::Id => self.id.cmp(&other.id),
            ContactField::FirstName => compare_text(&self.first_name, &other.first_name),
            ContactField::LastName => compare_text(&self.last_name, &other.last_name),
            ContactField::Email => compare_text(&self.email, &other.email),
            ContactField::Phone => compare_text(&self.phone, &other.phone),
            ContactField::Birthday => self.birthday.cmp(&other.birthday),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contact(id: i64, last: &str, birthday: (i32, u32, u32)) -> Contact {
        Contact {
            id,
            first_name: "Test".to_owned(),
            last_name: last.to_owned(),
            email: format!("{id}@example.com"),
            phone: String::new(),
            birthday: NaiveDate::from_ymd_opt(birthday.0, birthday.1, birthday.2)
                .expect("valid date"),
        }
    }

    #[test]
    fn resolves_wire_and_snake_case_names() {
        assert_eq!("lastName".parse::<ContactField>(), Ok(ContactField::LastName));
        assert_eq!("last_name".parse::<ContactField>(), Ok(ContactField::LastName));
        assert_eq!("FIRSTNAME".parse::<ContactField>(), Ok(ContactField::FirstName));
        for field in ContactField::ALL {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_name_keeps_raw_input() {
        assert_eq!(
            "nonexistent".parse::<ContactField>(),
            Err(QueryError::UnknownField { field: "nonexistent".to_owned() })
        );
        assert!("".parse::<ContactField>().is_err());
    }

    #[test]
    fn text_comparison_ignores_case() {
        let a = contact(1, "adams", (1990, 1, 1));
        let b = contact(2, "Baker", (1990, 1, 1));
        assert_eq!(a.compare_field(&b, ContactField::LastName), Ordering::Less);
        let c = contact(3, "ADAMS", (1990, 1, 1));
        assert_eq!(a.compare_field(&c, ContactField::LastName), Ordering::Equal);
    }

    #[test]
    fn text_comparison_folds_non_ascii_and_orders_prefixes_first() {
        assert_eq!(compare_text("Émile", "éMILE"), Ordering::Equal);
        assert_eq!(compare_text("Ab", "abc"), Ordering::Less);
        assert_eq!(compare_text("zoë", "Zoe"), Ordering::Greater);
    }

    #[test]
    fn ids_compare_numerically_and_dates_chronologically() {
        let nine = contact(9, "x", (2001, 5, 1));
        let ten = contact(10, "x", (1999, 12, 31));
        assert_eq!(nine.compare_field(&ten, ContactField::Id), Ordering::Less);
        assert_eq!(nine.compare_field(&ten, ContactField::Birthday), Ordering::Greater);
        assert_eq!(nine.field_text(ContactField::Birthday), "2001-05-01");
        assert_eq!(ten.field_text(ContactField::Id), "10");
    }
}
