//! Quote types

use serde::{Deserialize, Deserializer, Serialize};

/// A stored quote.
///
/// `id` is assigned by the store on creation and is never `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub author: String,
    pub text: String,
    pub id: u32,
}

impl Quote {
    pub fn new(id: u32, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            id,
        }
    }

    pub fn is_by(&self, author: &str) -> bool {
        self.author == author
    }
}

/// Quote creation request
///
/// Absent and `null` fields decode as empty strings so the caller can report
/// them as a validation failure instead of a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Both `author` and `text` are present
    pub fn is_complete(&self) -> bool {
        !self.author.is_empty() && !self.text.is_empty()
    }

    pub fn into_quote(self, id: u32) -> Quote {
        Quote {
            author: self.author,
            text: self.text,
            id,
        }
    }
}
