//! Marriage module - the only non-blood link the engine knows about

use crate::{Person, PersonId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A marriage between a husband and a wife
///
/// Current and past marriages are not distinguished when resolving spouses;
/// the dates are carried for presentation only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marriage {
    /// Husband (male role)
    pub husband: PersonId,

    /// Wife (female role)
    pub wife: PersonId,

    /// Wedding date
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,

    /// Divorce date
    #[serde(default)]
    pub divorce_date: Option<NaiveDate>,
}

impl Marriage {
    /// Create a marriage with no recorded dates
    pub fn new(husband: PersonId, wife: PersonId) -> Self {
        Self {
            husband,
            wife,
            wedding_date: None,
            divorce_date: None,
        }
    }

    /// The other party of this marriage, if `id` is one of them
    pub fn spouse_of(&self, id: PersonId) -> Option<PersonId> {
        if self.husband == id {
            Some(self.wife)
        } else if self.wife == id {
            Some(self.husband)
        } else {
            None
        }
    }

    /// Whether the marriage ended in divorce
    pub fn is_dissolved(&self) -> bool {
        self.divorce_date.is_some()
    }

    /// Short title such as "John Smith & Mary Jones"
    ///
    /// The wife is shown under her maiden name when she has one.
    pub fn title(husband: &Person, wife: &Person) -> String {
        format!("{} & {}", husband.name(false, false), wife.name(false, true))
    }
}
