use crate::Error;
use std::str::FromStr;

/// A page of a paginated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// A page number.
    Number(u32),

    /// Every page at once.
    All,
}

impl Page {
    /// Write this page as a query value into the given buffer.
    pub(crate) fn format<'a>(&self, buffer: &'a mut itoa::Buffer) -> &'a str {
        match self {
            Self::Number(n) => buffer.format(*n),
            Self::All => "all",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl From<u32> for Page {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }

        s.parse()
            .map(Self::Number)
            .map_err(|_| Error::InvalidPage(s.into()))
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buffer = itoa::Buffer::new();
        f.write_str(self.format(&mut buffer))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("1".parse::<Page>().unwrap(), Page::Number(1));
        assert_eq!("all".parse::<Page>().unwrap(), Page::All);
        assert!(matches!("-1".parse::<Page>(), Err(Error::InvalidPage(_))));
        assert!(matches!("first".parse::<Page>(), Err(Error::InvalidPage(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Page::Number(42).to_string(), "42");
        assert_eq!(Page::All.to_string(), "all");
    }
}
