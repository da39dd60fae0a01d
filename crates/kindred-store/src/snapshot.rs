//! JSON snapshot of a family

use kindred_domain::{Marriage, Person};
use serde::{Deserialize, Serialize};

/// Serializable contents of a [`MemoryStore`](crate::MemoryStore)
///
/// ```json
/// {
///   "people": [
///     { "id": "0190a0b2-7c3d-7000-8000-000000000001", "forename": "Ada",
///       "surname": "Byron", "gender": "F", "date_of_birth": "1815-12-10" }
///   ],
///   "marriages": []
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    /// Every person in the family
    #[serde(default)]
    pub people: Vec<Person>,

    /// Every marriage, past or present
    #[serde(default)]
    pub marriages: Vec<Marriage>,
}
