use std::fmt::{Debug, Display};
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};

use crate::taggedid::TaggedId;

pub type UserId = TaggedId<User>;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Encodes the user as a JSON object, e.g. `{"id":"john-sundell","name":"John Sundel"}`.
    #[tracing::instrument]
    pub fn to_json_string(&self) -> Result<String, Error> {
        let bytes = serde_json::to_vec(self).map_err(Error::Encoding)?;
        let json = String::from_utf8(bytes).map_err(Error::EncodingToString)?;

        Ok(json)
    }
}

/// Failures when turning a [`User`] into text.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Error {
    #[serde(serialize_with = "crate::error::display")]
    Encoding(serde_json::Error),
    #[serde(serialize_with = "crate::error::display")]
    EncodingToString(FromUtf8Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encoding(err) => Some(err),
            Error::EncodingToString(err) => Some(err),
        }
    }
}
