//! Family roster

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;
use super::{Record, RecordValidationError};

/// A household member. Not part of any financial aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if self.role.trim().is_empty() {
            return Err(RecordValidationError::EmptyRole);
        }
        Ok(())
    }
}

impl Record for FamilyMember {
    type Id = MemberId;
    const KIND: &'static str = "Family member";

    fn id(&self) -> MemberId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FamilyMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member() {
        let member = FamilyMember::new("Asha", "Parent");
        assert_eq!(member.to_string(), "Asha (Parent)");
        assert!(member.validate().is_ok());
        assert_eq!(
            FamilyMember::new("Asha", "").validate(),
            Err(RecordValidationError::EmptyRole)
        );
    }
}
