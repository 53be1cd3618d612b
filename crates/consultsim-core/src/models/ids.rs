//! Identifiers for the entities consultsim touches.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

/// A consultant row. Opaque to generation: whatever the store holds is
/// written back unchanged, so integer and text keys both round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsultantId {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ConsultantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ConsultantId {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for ConsultantId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ConsultantId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

entity_id!(
    /// A title level. Ordering by id is ordering by rank (1 = most junior).
    TitleId
);
entity_id!(
    /// A deliverable row.
    DeliverableId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultant_ids_display_their_raw_value() {
        assert_eq!(ConsultantId::from(7).to_string(), "7");
        assert_eq!(ConsultantId::from("C001").to_string(), "C001");
    }

    #[test]
    fn consultant_ids_serialize_untagged() {
        let json = serde_json::to_string(&[ConsultantId::from(3), ConsultantId::from("C9")]).unwrap();
        assert_eq!(json, r#"[3,"C9"]"#);
    }
}
