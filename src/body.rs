use crate::{
    Error,
    ReturnType,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A json body
    Json(serde_json::Value),

    /// A text body
    Text(String),

    /// The raw body
    Content(Bytes),
}

impl Body {
    /// Decode a response according to the given [`ReturnType`].
    pub(crate) async fn from_response(
        response: reqwest::Response,
        return_type: ReturnType,
    ) -> Result<Self, Error> {
        Ok(match return_type {
            ReturnType::Json => Self::Json(response.json().await?),
            ReturnType::Text => Self::Text(response.text().await?),
            ReturnType::Content => Self::Content(response.bytes().await?),
        })
    }

    /// Get the [`ReturnType`] this body was decoded with.
    pub fn return_type(&self) -> ReturnType {
        match self {
            Self::Json(_) => ReturnType::Json,
            Self::Text(_) => ReturnType::Text,
            Self::Content(_) => ReturnType::Content,
        }
    }

    /// Get this as json, if it is json.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Get this as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get this as raw bytes, if it is raw bytes.
    pub fn as_content(&self) -> Option<&Bytes> {
        match self {
            Self::Content(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the json value, if it is json.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Deserialize this body into a type, whatever it was decoded as.
    pub fn deserialize<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        Ok(match self {
            Self::Json(value) => T::deserialize(value)?,
            Self::Text(text) => serde_json::from_str(text)?,
            Self::Content(bytes) => serde_json::from_slice(bytes)?,
        })
    }
}
