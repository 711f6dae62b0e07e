use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique object handle, mirroring the model handles of the source data.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct UID(String);

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_unique() {
        assert_ne!(UID::new(), UID::new());
    }

    #[test]
    fn test_uid_from_str() {
        let uid = UID::from("handle-1");
        assert_eq!(uid.as_str(), "handle-1");
    }
}
