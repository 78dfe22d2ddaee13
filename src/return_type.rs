use crate::Error;
use std::str::FromStr;

/// How a response body is decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnType {
    /// Decode the body as json.
    #[default]
    Json,

    /// Decode the body as text.
    Text,

    /// Keep the raw body bytes.
    Content,
}

impl ReturnType {
    /// Get the name of this return type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Content => "content",
        }
    }
}

impl FromStr for ReturnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "content" => Ok(Self::Content),
            s => Err(Error::InvalidReturnType(s.into())),
        }
    }
}

impl TryFrom<&str> for ReturnType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
