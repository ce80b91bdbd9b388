//! Roster members and boundary validation
//!
//! Raw members arrive from storage or the network with type names as
//! strings. They are validated here, before analysis: unknown type names
//! are rejected rather than treated as neutral.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use typedex_chart::Type;

/// Largest roster accepted at the boundary
pub const MAX_ROSTER_SIZE: usize = 6;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Member {member:?} has unknown type {type_name:?}")]
    UnknownType { member: String, type_name: String },

    #[error("Member has an empty name")]
    EmptyName,

    #[error("Member {member:?} has {count} types, expected 1 or 2")]
    TypeCount { member: String, count: usize },

    #[error("Member {member:?} lists {type_name} twice")]
    DuplicateType { member: String, type_name: Type },

    #[error("Roster has {count} members, at most {max} are allowed")]
    TooManyMembers { count: usize, max: usize },

    #[error("Roster member {index} is invalid: {source}")]
    InvalidMember {
        index: usize,
        source: Box<RosterError>,
    },

    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A roster member as stored by the catalog, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRosterMember {
    pub name: String,

    pub types: Vec<String>,

    /// Opaque image reference, carried through untouched
    #[serde(default)]
    pub image_ref: String,
}

/// A validated roster member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRosterMember")]
pub struct RosterMember {
    /// Display name, unique within one roster
    pub name: String,

    /// One or two types, in order
    pub types: Vec<Type>,

    /// Opaque image reference (not used by the analysis)
    pub image_ref: String,
}

impl RosterMember {
    /// Create a member from a name and type list
    pub fn new(name: impl Into<String>, types: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            types,
            image_ref: String::new(),
        }
    }

    /// Create a single-type member
    pub fn mono(name: impl Into<String>, t: Type) -> Self {
        Self::new(name, vec![t])
    }

    /// Create a dual-type member
    pub fn dual(name: impl Into<String>, primary: Type, secondary: Type) -> Self {
        Self::new(name, vec![primary, secondary])
    }

    /// Attach an image reference
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Primary type, if any
    pub fn primary_type(&self) -> Option<Type> {
        self.types.first().copied()
    }

    /// Secondary type, if the member is dual-typed
    pub fn secondary_type(&self) -> Option<Type> {
        self.types.get(1).copied()
    }

    /// Validate a raw member, resolving its type names
    pub fn try_from_raw(raw: RawRosterMember) -> Result<Self, RosterError> {
        if raw.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }

        if raw.types.is_empty() || raw.types.len() > 2 {
            return Err(RosterError::TypeCount {
                member: raw.name,
                count: raw.types.len(),
            });
        }

        let mut types = Vec::with_capacity(raw.types.len());
        for type_name in &raw.types {
            let Some(t) = Type::from_protocol(type_name) else {
                return Err(RosterError::UnknownType {
                    member: raw.name,
                    type_name: type_name.clone(),
                });
            };
            if types.contains(&t) {
                return Err(RosterError::DuplicateType {
                    member: raw.name,
                    type_name: t,
                });
            }
            types.push(t);
        }

        Ok(Self {
            name: raw.name,
            types,
            image_ref: raw.image_ref,
        })
    }
}

impl TryFrom<RawRosterMember> for RosterMember {
    type Error = RosterError;

    fn try_from(raw: RawRosterMember) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

impl From<RosterMember> for RawRosterMember {
    fn from(member: RosterMember) -> Self {
        Self {
            name: member.name,
            types: member.types.iter().map(|t| t.id().to_string()).collect(),
            image_ref: member.image_ref,
        }
    }
}

/// Parse and validate a roster from a JSON array of raw members
pub fn parse_roster_json(json: &str) -> Result<Vec<RosterMember>, RosterError> {
    let raw: Vec<RawRosterMember> = serde_json::from_str(json)?;

    if raw.len() > MAX_ROSTER_SIZE {
        tracing::warn!(count = raw.len(), max = MAX_ROSTER_SIZE, "Rejected oversized roster");
        return Err(RosterError::TooManyMembers {
            count: raw.len(),
            max: MAX_ROSTER_SIZE,
        });
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, member)| {
            RosterMember::try_from_raw(member).map_err(|e| {
                tracing::warn!(index, error = %e, "Rejected roster member");
                RosterError::InvalidMember {
                    index,
                    source: Box::new(e),
                }
            })
        })
        .collect()
}
