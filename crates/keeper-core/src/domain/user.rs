use std::fmt;

use uuid::Uuid;

/// How a caller identifies a user that could not be found.
///
/// Lookups by email or username carry the raw parameter; lookups by id
/// carry the typed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(Uuid),
    Param(String),
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRef::Id(id) => write!(f, "{}", id),
            UserRef::Param(param) => f.write_str(param),
        }
    }
}

impl From<Uuid> for UserRef {
    fn from(id: Uuid) -> Self {
        UserRef::Id(id)
    }
}

impl From<String> for UserRef {
    fn from(param: String) -> Self {
        UserRef::Param(param)
    }
}

impl From<&str> for UserRef {
    fn from(param: &str) -> Self {
        UserRef::Param(param.to_string())
    }
}
