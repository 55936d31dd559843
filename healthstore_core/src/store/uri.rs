use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const SCHEME: &str = "content://";

/// Address of a collection or row in the store
///
/// Addresses have the form `content://{authority}/{segment}/...`. The
/// distinguished empty address (no authority, no segments) is what a store
/// returns from a policy-denied insert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreUri {
    authority: String,
    segments: Vec<String>,
}

impl StoreUri {
    /// The empty address
    pub fn empty() -> Self {
        Self::default()
    }

    /// Address rooted at `authority` with one path (which may contain `/`)
    pub fn base(authority: &str, path: &str) -> Self {
        StoreUri {
            authority: authority.to_string(),
            segments: Vec::new(),
        }
        .with_appended_path(path)
    }

    /// Parse `content://authority/a/b`; the empty string parses to the empty address
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::empty());
        }

        let rest = input
            .strip_prefix(SCHEME)
            .ok_or_else(|| Error::InvalidUri(format!("missing {} scheme: {}", SCHEME, input)))?;

        let mut parts = rest.split('/');
        let authority = parts.next().unwrap_or_default();
        if authority.is_empty() {
            return Err(Error::InvalidUri(format!("missing authority: {}", input)));
        }

        Ok(StoreUri {
            authority: authority.to_string(),
            segments: parts
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.authority.is_empty() && self.segments.is_empty()
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn last_path_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// New address with `path` split on `/` and appended
    pub fn with_appended_path(&self, path: &str) -> Self {
        let mut uri = self.clone();
        uri.segments.extend(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        );
        uri
    }
}

impl fmt::Display for StoreUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}{}", SCHEME, self.authority)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for StoreUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StoreUri::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let uri = StoreUri::parse("content://org.example.health/activity/2/15").unwrap();
        assert_eq!(uri.authority(), "org.example.health");
        assert_eq!(uri.segments(), &["activity", "2", "15"]);
        assert_eq!(uri.last_path_segment(), Some("15"));
        assert_eq!(uri.to_string(), "content://org.example.health/activity/2/15");
    }

    #[test]
    fn test_append_path() {
        let base = StoreUri::base("org.example.health", "blood");
        let row = base.with_appended_path("3002/7");
        assert_eq!(row.to_string(), "content://org.example.health/blood/3002/7");
        // appending never mutates the base
        assert_eq!(base.segments().len(), 1);
    }

    #[test]
    fn test_empty_uri() {
        let empty = StoreUri::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.last_path_segment(), None);
        assert_eq!(empty.to_string(), "");
        assert_eq!(StoreUri::parse("").unwrap(), empty);
    }

    #[test]
    fn test_invalid_uris() {
        assert!(matches!(
            StoreUri::parse("http://x/y"),
            Err(Error::InvalidUri(_))
        ));
        assert!(matches!(StoreUri::parse("content:///y"), Err(Error::InvalidUri(_))));
    }

    #[test]
    fn test_authority_only_is_not_empty() {
        let uri = StoreUri::parse("content://org.example.health").unwrap();
        assert!(!uri.is_empty());
        assert_eq!(uri.last_path_segment(), None);
    }
}
