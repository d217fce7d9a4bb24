//! User record shown on the profile screen.

use serde::{Deserialize, Serialize};

/// Geographic coordinates of an address (strings on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude.
    pub lat: String,
    /// Longitude.
    pub lng: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name and number.
    pub street: String,
    /// Apartment or suite.
    pub suite: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Coordinates.
    pub geo: Geo,
}

/// Employer of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Slogan.
    pub catch_phrase: String,
    /// Business description.
    pub bs: String,
}

/// A user record as served by the remote users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: u64,
    /// Full name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    pub address: Address,
    /// Phone number as entered, extension included.
    pub phone: String,
    /// Personal website.
    pub website: String,
    /// Employer.
    pub company: Company,
}

impl User {
    /// Initials built from the first character of each space-separated word.
    ///
    /// `"Leanne Graham"` → `"LG"`. Empty words (double spaces) contribute nothing.
    pub fn initials(&self) -> String {
        initials_of(&self.name)
    }

    /// User id zero-padded to eight digits for display.
    pub fn display_id(&self) -> String {
        format!("{:08}", self.id)
    }

    /// Single-line address: `street, suite, city`.
    pub fn display_address(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.street, self.address.suite, self.address.city
        )
    }
}

/// Initials for an arbitrary display name.
pub fn initials_of(name: &str) -> String {
    name.split(' ').filter_map(|word| word.chars().next()).collect()
}

#[cfg(test)]
pub(crate) fn sample_user() -> User {
    User {
        id: 1,
        name: "Leanne Graham".to_string(),
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031 x56442".to_string(),
        website: "hildegard.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}
