//! Strongly-typed ID wrappers for all record types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! record types at compile time. IDs are random v4 UUIDs, so records created
//! in the same instant never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Behaviour shared by every record identifier
pub trait RecordId: Copy + Eq + fmt::Display {
    /// Whether a user-typed reference points at this ID
    fn matches_reference(&self, reference: &str) -> bool;
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Whether a user-typed reference (short form, prefix or full UUID)
            /// points at this ID
            pub fn matches_prefix(&self, reference: &str) -> bool {
                let reference = reference.trim().to_lowercase();
                let reference = reference
                    .strip_prefix($display_prefix)
                    .unwrap_or(reference.as_str());
                !reference.is_empty() && self.0.to_string().starts_with(reference)
            }
        }

        impl RecordId for $name {
            fn matches_reference(&self, reference: &str) -> bool {
                self.matches_prefix(reference)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }
    };
}

define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");
define_id!(BillId, "bil-");
define_id!(MemberId, "mem-");
