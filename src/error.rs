/// Library Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reqwest http error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// A url parse error
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// A json error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The return type is not one of `json`, `text`, or `content`.
    #[error("invalid return type \"{0}\", expected one of \"json\", \"text\", or \"content\"")]
    InvalidReturnType(Box<str>),

    /// The page is neither a number nor `all`.
    #[error("invalid page \"{0}\"")]
    InvalidPage(Box<str>),

    /// The base url cannot have path segments appended to it.
    #[error("the url \"{0}\" cannot be a base")]
    CannotBeABase(Box<str>),
}
