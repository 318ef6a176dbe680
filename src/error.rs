use std::fmt::{Debug, Display};

use serde::{Serialize, Serializer};

use crate::article::ArticleId;
use crate::user;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Error {
    #[serde(serialize_with = "display")]
    InvalidJson(serde_json::Error),
    ArticleDoesNotExist {
        article_id: ArticleId,
    },
    #[serde(serialize_with = "display")]
    User(user::Error),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::ArticleDoesNotExist { .. } => "E4041000",
            Error::User(_) => "E5001000",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::ArticleDoesNotExist { .. } => "The requested article does not exist",
            Error::User(_) => "An error occurred when encoding a user to text",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::InvalidJson(error)
    }
}

impl From<user::Error> for Error {
    fn from(error: user::Error) -> Error {
        Error::User(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::User(err) => Some(err),
            _ => None,
        }
    }
}

pub(crate) fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
