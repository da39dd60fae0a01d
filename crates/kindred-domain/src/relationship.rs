//! Relationship module - how one person is related to another
//!
//! A [`RelationshipLabel`] always describes the *other* person from the
//! subject's point of view ("my grandmother", "my first cousin once removed").
//! The arithmetic is gender-free; gender only picks the final noun.

use crate::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How another person is related to a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationshipLabel {
    /// Direct ancestor; 1 = parent, 2 = grandparent, ...
    Ancestor {
        /// Generations between subject and ancestor
        generations: u32,
        /// Gender of the ancestor
        gender: Gender,
    },

    /// Direct descendant; 1 = child, 2 = grandchild, ...
    Descendant {
        /// Generations between subject and descendant
        generations: u32,
        /// Gender of the descendant
        gender: Gender,
    },

    /// Brother or sister
    Sibling {
        /// Only one parent in common
        half: bool,
        /// Gender of the sibling
        gender: Gender,
    },

    /// Sibling of an ancestor
    AuntOrUncle {
        /// Number of "great-" prefixes
        greats: u32,
        /// Gender of the aunt or uncle
        gender: Gender,
    },

    /// Descendant of a sibling
    NieceOrNephew {
        /// Number of "great-" prefixes
        greats: u32,
        /// Gender of the niece or nephew
        gender: Gender,
    },

    /// Cousin of some degree, possibly removed
    Cousin {
        /// 1 = first cousin, 2 = second cousin, ...
        degree: u32,
        /// Generational offset between the two cousins
        removed: u32,
    },

    /// Husband or wife
    Spouse {
        /// Gender of the spouse
        gender: Gender,
    },

    /// No blood or marriage link
    Unrelated,
}

impl RelationshipLabel {
    /// Label the other person given both distances to a common ancestor
    ///
    /// `subject_distance` and `other_distance` count parent links from each
    /// person up to the shared ancestor; either may be zero when the ancestor
    /// is one of the two people. `full` says whether two people at distance
    /// one share both parents.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::{Gender, RelationshipLabel};
    ///
    /// let label = RelationshipLabel::from_distances(2, 3, Gender::Female, true);
    /// assert_eq!(label.to_string(), "first cousin once removed");
    ///
    /// let label = RelationshipLabel::from_distances(3, 1, Gender::Female, true);
    /// assert_eq!(label.to_string(), "great-aunt");
    /// ```
    pub fn from_distances(
        subject_distance: u32,
        other_distance: u32,
        other_gender: Gender,
        full: bool,
    ) -> Self {
        let (da, db) = (subject_distance, other_distance);
        let nearest = da.min(db);
        let farthest = da.max(db);

        match (da, db) {
            (0, 0) => RelationshipLabel::Unrelated,
            (0, generations) => RelationshipLabel::Descendant {
                generations,
                gender: other_gender,
            },
            (generations, 0) => RelationshipLabel::Ancestor {
                generations,
                gender: other_gender,
            },
            (1, 1) => RelationshipLabel::Sibling {
                half: !full,
                gender: other_gender,
            },
            _ if nearest == 1 => {
                let greats = farthest - 2;
                if da < db {
                    RelationshipLabel::NieceOrNephew {
                        greats,
                        gender: other_gender,
                    }
                } else {
                    RelationshipLabel::AuntOrUncle {
                        greats,
                        gender: other_gender,
                    }
                }
            }
            _ => RelationshipLabel::Cousin {
                degree: nearest - 1,
                removed: farthest - nearest,
            },
        }
    }

    /// Whether this label names an actual relation
    pub fn is_related(&self) -> bool {
        !matches!(self, RelationshipLabel::Unrelated)
    }

    /// Whether this is a blood relation (anything but spouse or unrelated)
    pub fn is_blood(&self) -> bool {
        !matches!(
            self,
            RelationshipLabel::Spouse { .. } | RelationshipLabel::Unrelated
        )
    }

    /// The same relation seen from the other side
    ///
    /// `subject_gender` is the gender of the person this label was computed
    /// for, who becomes the one being described.
    pub fn inverse(&self, subject_gender: Gender) -> Self {
        let gender = subject_gender;
        match *self {
            RelationshipLabel::Ancestor { generations, .. } => {
                RelationshipLabel::Descendant { generations, gender }
            }
            RelationshipLabel::Descendant { generations, .. } => {
                RelationshipLabel::Ancestor { generations, gender }
            }
            RelationshipLabel::Sibling { half, .. } => RelationshipLabel::Sibling { half, gender },
            RelationshipLabel::AuntOrUncle { greats, .. } => {
                RelationshipLabel::NieceOrNephew { greats, gender }
            }
            RelationshipLabel::NieceOrNephew { greats, .. } => {
                RelationshipLabel::AuntOrUncle { greats, gender }
            }
            RelationshipLabel::Cousin { degree, removed } => {
                RelationshipLabel::Cousin { degree, removed }
            }
            RelationshipLabel::Spouse { .. } => RelationshipLabel::Spouse { gender },
            RelationshipLabel::Unrelated => RelationshipLabel::Unrelated,
        }
    }
}

/// "great-" repeated `n` times
fn greats(n: u32) -> String {
    "great-".repeat(n as usize)
}

/// Lineal noun for `generations` (parent/grandparent/great-grandparent)
fn lineal(generations: u32, base: &str) -> String {
    match generations {
        0 => String::new(),
        1 => base.to_string(),
        n => format!("{}grand{}", greats(n - 2), base),
    }
}

/// Ordinal word for a cousin degree
fn ordinal(n: u32) -> String {
    const WORDS: [&str; 10] = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth",
    ];
    if (1..=10).contains(&n) {
        return WORDS[n as usize - 1].to_string();
    }
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// "once removed", "twice removed", "4 times removed"
fn removal(n: u32) -> String {
    match n {
        1 => "once removed".to_string(),
        2 => "twice removed".to_string(),
        3 => "three times removed".to_string(),
        n => format!("{} times removed", n),
    }
}

impl fmt::Display for RelationshipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RelationshipLabel::Ancestor { generations, gender } => {
                write!(f, "{}", lineal(generations, gender.pick("father", "mother")))
            }
            RelationshipLabel::Descendant { generations, gender } => {
                write!(f, "{}", lineal(generations, gender.pick("son", "daughter")))
            }
            RelationshipLabel::Sibling { half, gender } => {
                let noun = gender.pick("brother", "sister");
                if half {
                    write!(f, "half-{}", noun)
                } else {
                    write!(f, "{}", noun)
                }
            }
            RelationshipLabel::AuntOrUncle { greats: n, gender } => {
                write!(f, "{}{}", greats(n), gender.pick("uncle", "aunt"))
            }
            RelationshipLabel::NieceOrNephew { greats: n, gender } => {
                write!(f, "{}{}", greats(n), gender.pick("nephew", "niece"))
            }
            RelationshipLabel::Cousin { degree, removed } => {
                write!(f, "{} cousin", ordinal(degree))?;
                if removed > 0 {
                    write!(f, " {}", removal(removed))?;
                }
                Ok(())
            }
            RelationshipLabel::Spouse { gender } => {
                write!(f, "{}", gender.pick("husband", "wife"))
            }
            RelationshipLabel::Unrelated => write!(f, "unrelated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Gender::{Female, Male};

    fn label(da: u32, db: u32, gender: Gender) -> String {
        RelationshipLabel::from_distances(da, db, gender, true).to_string()
    }

    #[test]
    fn test_lineal_ancestors() {
        assert_eq!(label(1, 0, Female), "mother");
        assert_eq!(label(1, 0, Male), "father");
        assert_eq!(label(2, 0, Female), "grandmother");
        assert_eq!(label(3, 0, Male), "great-grandfather");
        assert_eq!(label(5, 0, Female), "great-great-great-grandmother");
    }

    #[test]
    fn test_lineal_descendants() {
        assert_eq!(label(0, 1, Female), "daughter");
        assert_eq!(label(0, 1, Male), "son");
        assert_eq!(label(0, 2, Male), "grandson");
        assert_eq!(label(0, 4, Female), "great-great-granddaughter");
    }

    #[test]
    fn test_siblings() {
        assert_eq!(label(1, 1, Female), "sister");
        let half = RelationshipLabel::from_distances(1, 1, Male, false);
        assert_eq!(half.to_string(), "half-brother");
        assert_eq!(half, RelationshipLabel::Sibling { half: true, gender: Male });
    }

    #[test]
    fn test_aunts_and_nieces() {
        // Other is a sibling of one of my ancestors
        assert_eq!(label(2, 1, Female), "aunt");
        assert_eq!(label(3, 1, Male), "great-uncle");
        assert_eq!(label(4, 1, Female), "great-great-aunt");

        assert_eq!(label(1, 2, Female), "niece");
        assert_eq!(label(1, 3, Male), "great-nephew");
    }

    #[test]
    fn test_cousins() {
        assert_eq!(label(2, 2, Male), "first cousin");
        assert_eq!(label(2, 3, Male), "first cousin once removed");
        assert_eq!(label(3, 2, Female), "first cousin once removed");
        assert_eq!(label(3, 3, Female), "second cousin");
        assert_eq!(label(2, 4, Female), "first cousin twice removed");
        assert_eq!(label(4, 7, Female), "third cousin three times removed");
        assert_eq!(label(2, 7, Female), "first cousin 5 times removed");
    }

    #[test]
    fn test_cousin_arithmetic() {
        assert_eq!(
            RelationshipLabel::from_distances(4, 6, Male, true),
            RelationshipLabel::Cousin { degree: 3, removed: 2 }
        );
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(10), "tenth");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(113), "113th");
    }

    #[test]
    fn test_same_person_is_unrelated() {
        let l = RelationshipLabel::from_distances(0, 0, Male, true);
        assert!(!l.is_related());
        assert_eq!(l.to_string(), "unrelated");
    }

    #[test]
    fn test_inverse() {
        let grandmother = RelationshipLabel::from_distances(2, 0, Female, true);
        assert_eq!(grandmother.to_string(), "grandmother");
        assert_eq!(grandmother.inverse(Male).to_string(), "grandson");

        let aunt = RelationshipLabel::from_distances(2, 1, Female, true);
        assert_eq!(aunt.inverse(Female).to_string(), "niece");

        let cousin = RelationshipLabel::Cousin { degree: 1, removed: 1 };
        assert_eq!(cousin.inverse(Male), cousin);
    }

    #[test]
    fn test_spouse_is_not_blood() {
        let wife = RelationshipLabel::Spouse { gender: Female };
        assert_eq!(wife.to_string(), "wife");
        assert!(wife.is_related());
        assert!(!wife.is_blood());
    }
}
