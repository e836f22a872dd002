use std::fmt;

use serde::{Deserialize, Deserializer};

/// A library patron and the books they marked as favorites.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub name: String,
    pub surname: String,
    /// Opaque contact handle used for SMS delivery.
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub favorite_books: Vec<Book>,
    pub subscribed: bool,
}

impl Visitor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorite_books.len()
    }
}

/// A book, compared by all of its fields.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub author: String,
    pub publishing_year: i32,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({})",
            self.name, self.author, self.publishing_year
        )
    }
}

/// Text message addressed to a subscribed visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub phone_number: String,
    pub message: String,
}

impl SmsMessage {
    pub fn new(phone_number: &str, message: &str) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            message: message.to_string(),
        }
    }
}

// `favoriteBooks: null` loads as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Book>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Book>>::deserialize(deserializer)?.unwrap_or_default())
}
