//! Naming the blood relation between two people
//!
//! Direct lines are read off ancestor distances. Everything else goes through
//! the closest common ancestor: the one minimizing the sum of both distances,
//! preferring an ancestor shared together with their partner (full rather
//! than half relation) when sums tie.

use crate::config::KinshipConfig;
use crate::error::{store_error, KinshipError};
use crate::walker::{self, ancestor_distances, AncestorDistances, Explored};
use kindred_domain::{PersonId, PersonStore, RelationshipLabel};
use serde::Serialize;
use std::collections::HashSet;

/// Pairs of people who share a child, smaller id first
pub type Couples = HashSet<(PersonId, PersonId)>;

fn couple(a: PersonId, b: PersonId) -> (PersonId, PersonId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Every mother and father pair recorded in an explored ancestry
fn couples_in(graph: &Explored) -> Couples {
    graph
        .values()
        .filter_map(|parents| match parents.as_slice() {
            [a, b] => Some(couple(*a, *b)),
            _ => None,
        })
        .collect()
}

/// An ancestor shared by two people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonAncestor {
    /// The shared ancestor
    pub ancestor: PersonId,
    /// Generations from the subject up to the ancestor
    pub subject_distance: u32,
    /// Generations from the other person up to the ancestor
    pub other_distance: u32,
    /// The ancestor's partner, with whom they share a child in the subject's
    /// ancestry, is a common ancestor at exactly the same distances
    pub shared_with_partner: bool,
}

impl CommonAncestor {
    fn closeness(&self) -> (u32, bool, u32, PersonId) {
        (
            self.subject_distance + self.other_distance,
            !self.shared_with_partner,
            self.subject_distance.abs_diff(self.other_distance),
            self.ancestor,
        )
    }
}

/// Common ancestors of two people given their ancestor distances, closest first
///
/// `couples` holds the parent pairs of the subject's ancestry; only those
/// count as partners for the full-relation tie-break.
pub fn common_ancestors(
    subject: &AncestorDistances,
    other: &AncestorDistances,
    couples: &Couples,
) -> Vec<CommonAncestor> {
    let shared: Vec<(PersonId, u32, u32)> = subject
        .iter()
        .filter_map(|(id, da)| other.get(id).map(|db| (*id, *da, *db)))
        .collect();

    let mut found: Vec<CommonAncestor> = shared
        .iter()
        .map(|&(ancestor, da, db)| CommonAncestor {
            ancestor,
            subject_distance: da,
            other_distance: db,
            shared_with_partner: shared
                .iter()
                .any(|&(id, a, b)| {
                    id != ancestor && a == da && b == db && couples.contains(&couple(id, ancestor))
                }),
        })
        .collect();
    found.sort_by_key(CommonAncestor::closeness);
    found
}

/// Labels relatives of one subject, reusing the subject's ancestry
pub struct KinshipNamer<'s, S> {
    store: &'s S,
    config: &'s KinshipConfig,
    subject: PersonId,
    ancestry: AncestorDistances,
    couples: Couples,
}

impl<'s, S> KinshipNamer<'s, S>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    /// Prepare to describe people relative to `subject`
    pub fn new(store: &'s S, subject: PersonId, config: &'s KinshipConfig) -> Result<Self, KinshipError> {
        let (graph, ancestry) = walker::ancestry(store, subject, config)?;
        Ok(Self {
            store,
            config,
            subject,
            ancestry,
            couples: couples_in(&graph),
        })
    }

    /// The subject's ancestor distances
    pub fn ancestry(&self) -> &AncestorDistances {
        &self.ancestry
    }

    /// Common ancestors of the subject and `other`, closest first
    pub fn common_ancestors(&self, other: PersonId) -> Result<Vec<CommonAncestor>, KinshipError> {
        let other_ancestry = ancestor_distances(self.store, other, self.config)?;
        Ok(common_ancestors(&self.ancestry, &other_ancestry, &self.couples))
    }

    /// How `other` is related by blood to the subject
    ///
    /// Returns [`RelationshipLabel::Unrelated`] when they share no ancestor
    /// and neither descends from the other.
    pub fn describe(&self, other: PersonId) -> Result<RelationshipLabel, KinshipError> {
        if other == self.subject {
            return Ok(RelationshipLabel::Unrelated);
        }
        let gender = self.store.get_gender(other).map_err(store_error)?;

        if let Some(&d) = self.ancestry.get(&other) {
            return Ok(RelationshipLabel::from_distances(d, 0, gender, true));
        }

        let other_ancestry = ancestor_distances(self.store, other, self.config)?;
        if let Some(&d) = other_ancestry.get(&self.subject) {
            return Ok(RelationshipLabel::from_distances(0, d, gender, true));
        }

        let Some(closest) = common_ancestors(&self.ancestry, &other_ancestry, &self.couples).into_iter().next() else {
            return Ok(RelationshipLabel::Unrelated);
        };

        let full = closest.subject_distance == 1
            && closest.other_distance == 1
            && self.same_parents(other)?;

        Ok(RelationshipLabel::from_distances(
            closest.subject_distance,
            closest.other_distance,
            gender,
            full,
        ))
    }

    /// Both parents known and identical
    fn same_parents(&self, other: PersonId) -> Result<bool, KinshipError> {
        let mother = |id| self.store.get_mother(id).map_err(store_error);
        let father = |id| self.store.get_father(id).map_err(store_error);

        let (m1, m2) = (mother(self.subject)?, mother(other)?);
        let (f1, f2) = (father(self.subject)?, father(other)?);
        Ok(m1.is_some() && f1.is_some() && m1 == m2 && f1 == f2)
    }
}

/// How `other` is related by blood to `subject`
pub fn describe_relative<S>(
    store: &S,
    subject: PersonId,
    other: PersonId,
    config: &KinshipConfig,
) -> Result<RelationshipLabel, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    KinshipNamer::new(store, subject, config)?.describe(other)
}
