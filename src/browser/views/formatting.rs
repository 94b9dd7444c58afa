//! # Cell Formatting
//!
//! Display-only transformations applied to each record. Nothing here changes
//! the underlying values.

use crate::browser::models::{Address, UserRecord};

/// Country value that gets the "USA" label
const UNITED_STATES: &str = "United States";

/// Identifier with a leading zero for single-digit values
///
/// `7` shows as `07`; wider identifiers are untouched.
pub fn format_identifier(id: u32) -> String {
    let digits = id.to_string();
    if digits.len() <= 1 {
        format!("0{digits}")
    } else {
        digits
    }
}

/// Country cell: `"<state>, USA"` for the United States, `"<state>, "` otherwise
///
/// Other countries deliberately render an empty trailing segment; the cell
/// only ever names one country.
pub fn format_country(address: &Address) -> String {
    let country = if address.country == UNITED_STATES {
        "USA"
    } else {
        ""
    };
    format!("{}, {}", address.state, country)
}

/// One table row, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub image: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub country: String,
}

impl UserRow {
    /// Cells in column order
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.id,
            &self.image,
            &self.name,
            &self.age,
            &self.gender,
            &self.country,
        ]
    }
}

impl From<&UserRecord> for UserRow {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: format_identifier(user.id),
            image: user.image.clone(),
            name: user.full_name(),
            age: user.age.to_string(),
            gender: user.gender.to_string(),
            country: format_country(&user.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::models::Gender;

    fn address(state: &str, country: &str) -> Address {
        Address {
            state: state.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn single_digit_identifiers_should_be_zero_padded() {
        assert_eq!(format_identifier(0), "00");
        assert_eq!(format_identifier(1), "01");
        assert_eq!(format_identifier(9), "09");
    }

    #[test]
    fn wider_identifiers_should_be_unchanged() {
        assert_eq!(format_identifier(10), "10");
        assert_eq!(format_identifier(208), "208");
    }

    #[test]
    fn united_states_should_render_as_usa() {
        assert_eq!(
            format_country(&address("Colorado", "United States")),
            "Colorado, USA"
        );
    }

    #[test]
    fn other_countries_should_render_empty_segment() {
        assert_eq!(format_country(&address("Ontario", "Canada")), "Ontario, ");
        assert_eq!(format_country(&address("Bavaria", "Germany")), "Bavaria, ");
    }

    #[test]
    fn row_should_format_every_cell() {
        let user = UserRecord {
            id: 5,
            first_name: "Sophia".to_string(),
            last_name: "Brown".to_string(),
            age: 42,
            gender: Gender::Female,
            image: "https://dummyjson.com/icon/sophiab/128".to_string(),
            address: address("Washington", "United States"),
        };

        let row = UserRow::from(&user);

        assert_eq!(
            row.cells(),
            [
                "05",
                "https://dummyjson.com/icon/sophiab/128",
                "Sophia Brown",
                "42",
                "female",
                "Washington, USA",
            ]
        );
    }
}
