//! Resource name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated resource name.
///
/// A resource is a named, homogeneous collection of records (e.g. `users`,
/// `posts`). The name is the addressing key into storage, so it must be
/// safe to use as a file stem.
///
/// # Example
///
/// ```
/// use restash_core::ResourceName;
///
/// let resource = ResourceName::new("users").unwrap();
/// assert_eq!(resource.as_str(), "users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Create a new resource name from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, does not start with an
    /// ASCII letter, contains characters outside `[A-Za-z0-9._-]`, or
    /// exceeds 128 characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the resource name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ResourceName {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > 128 {
            return Err(InvalidInputError::ResourceName {
                value: s.to_string(),
                reason: "exceeds maximum length of 128 characters".to_string(),
            }
            .into());
        }

        let first = s.chars().next().unwrap();
        if !first.is_ascii_alphabetic() {
            return Err(InvalidInputError::ResourceName {
                value: s.to_string(),
                reason: "must start with a letter".to_string(),
            }
            .into());
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '.' {
                return Err(InvalidInputError::ResourceName {
                    value: s.to_string(),
                    reason: format!("contains invalid character '{}'", c),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourceName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ResourceName::new("users").is_ok());
        assert!(ResourceName::new("blog.posts").is_ok());
        assert!(ResourceName::new("order_items-v2").is_ok());
    }

    #[test]
    fn invalid_empty() {
        assert!(ResourceName::new("").is_err());
    }

    #[test]
    fn invalid_starts_with_digit() {
        assert!(ResourceName::new("1users").is_err());
    }

    #[test]
    fn invalid_path_separator() {
        assert!(ResourceName::new("users/admin").is_err());
        assert!(ResourceName::new("..").is_err());
    }

    #[test]
    fn invalid_too_long() {
        assert!(ResourceName::new("a".repeat(129)).is_err());
    }
}
