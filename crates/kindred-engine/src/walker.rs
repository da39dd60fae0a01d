//! Ancestor and descendant walks over a PersonStore
//!
//! Every walk first explores the reachable part of the graph with an explicit
//! stack, marking people that are still on the current path. Reaching one of
//! those again means the links loop; depending on [`CyclePolicy`] the walk
//! fails or drops the offending link. Distances and orderings are then read
//! off the explored (acyclic) graph, so no walk recurses on the call stack.

use crate::config::{CyclePolicy, KinshipConfig};
use crate::error::{store_error, KinshipError};
use kindred_domain::{Gender, PersonId, PersonStore};
use std::collections::{HashMap, HashSet, VecDeque};

/// Generation distance from one person to each of their ancestors
///
/// 1 = parent, 2 = grandparent, ... Always the shortest distance over every
/// parent chain.
pub type AncestorDistances = HashMap<PersonId, u32>;

/// Links kept after exploring from one person, keyed by the person they leave
pub(crate) type Explored = HashMap<PersonId, Vec<PersonId>>;

enum Mark {
    OnPath,
    Done,
}

struct Frame {
    node: PersonId,
    links: Vec<PersonId>,
    next: usize,
    kept: Vec<PersonId>,
}

/// Explore everything reachable from `start` through `links`
pub(crate) fn explore<F>(
    start: PersonId,
    config: &KinshipConfig,
    mut links: F,
) -> Result<Explored, KinshipError>
where
    F: FnMut(PersonId) -> Result<Vec<PersonId>, KinshipError>,
{
    let mut marks: HashMap<PersonId, Mark> = HashMap::new();
    let mut explored = Explored::new();

    marks.insert(start, Mark::OnPath);
    let mut stack = vec![Frame {
        node: start,
        links: links(start)?,
        next: 0,
        kept: Vec::new(),
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.links.len() {
            if let Some(done) = stack.pop() {
                marks.insert(done.node, Mark::Done);
                explored.insert(done.node, done.kept);
            }
            continue;
        }

        let target = frame.links[frame.next];
        frame.next += 1;

        match marks.get(&target) {
            Some(Mark::OnPath) => match config.cycle_policy {
                CyclePolicy::Fail => {
                    return Err(KinshipError::GraphIntegrity {
                        person: target,
                        detail: format!("link from {} leads back to {}", frame.node, target),
                    });
                }
                CyclePolicy::Prune => {
                    tracing::warn!(
                        "Pruning cyclic link {} -> {} while walking from {}",
                        frame.node,
                        target,
                        start
                    );
                }
            },
            Some(Mark::Done) => frame.kept.push(target),
            None => {
                frame.kept.push(target);
                marks.insert(target, Mark::OnPath);
                let next_links = links(target)?;
                stack.push(Frame {
                    node: target,
                    links: next_links,
                    next: 0,
                    kept: Vec::new(),
                });
            }
        }
    }

    Ok(explored)
}

/// Mother then father of `id`, skipping unknowns
pub(crate) fn parents_of<S>(store: &S, id: PersonId) -> Result<Vec<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let mother = store.get_mother(id).map_err(store_error)?;
    let father = store.get_father(id).map_err(store_error)?;
    Ok(mother.into_iter().chain(father).collect())
}

/// Children of `id` through the parent role matching their gender
pub(crate) fn children_of<S>(store: &S, id: PersonId) -> Result<Vec<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let children = match store.get_gender(id).map_err(store_error)? {
        Gender::Female => store.children_of_mother(id),
        Gender::Male => store.children_of_father(id),
    };
    children.map_err(store_error)
}

/// Explore the ancestry of `person`
pub(crate) fn ancestor_graph<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<Explored, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    explore(person, config, |id| parents_of(store, id))
}

/// Shortest distance from `start` to everything in `graph`, excluding `start`
fn distances(
    start: PersonId,
    graph: &Explored,
    config: &KinshipConfig,
) -> Result<HashMap<PersonId, u32>, KinshipError> {
    let mut found = HashMap::new();
    let mut queue = VecDeque::from([(start, 0u32)]);

    while let Some((id, depth)) = queue.pop_front() {
        for &next in graph.get(&id).map(Vec::as_slice).unwrap_or(&[]) {
            if next == start || found.contains_key(&next) {
                continue;
            }
            let depth = depth + 1;
            if depth as usize > config.max_depth {
                return Err(KinshipError::DepthExceeded {
                    person: start,
                    limit: config.max_depth,
                });
            }
            found.insert(next, depth);
            queue.push_back((next, depth));
        }
    }

    Ok(found)
}

/// Every ancestor of `person` with their minimum generation distance
pub fn ancestor_distances<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<AncestorDistances, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    Ok(ancestry(store, person, config)?.1)
}

/// The explored ancestor graph of `person` together with minimum distances
pub(crate) fn ancestry<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<(Explored, AncestorDistances), KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let graph = ancestor_graph(store, person, config)?;
    let found = distances(person, &graph, config)?;
    tracing::debug!("{} has {} ancestors", person, found.len());
    Ok((graph, found))
}

/// Every ancestor of `person`, without distances
pub fn ancestors<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<HashSet<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    Ok(ancestor_distances(store, person, config)?.into_keys().collect())
}

/// Every descendant of `person` with their minimum generation distance
pub fn descendant_distances<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<HashMap<PersonId, u32>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let graph = explore(person, config, |id| children_of(store, id))?;
    distances(person, &graph, config)
}

/// Every descendant of `person`, each listed once
///
/// Each person's children come out together in birth order, followed by
/// the full line of the first child, then the second child's, and so on.
pub fn descendants<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<Vec<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let graph = explore(person, config, |id| children_of(store, id))?;
    // The generation cap applies to minimum distances, not to DFS path length
    distances(person, &graph, config)?;

    let mut ordered = Vec::new();
    let mut seen = HashSet::from([person]);
    let mut pending = vec![person];

    while let Some(id) = pending.pop() {
        let fresh: Vec<PersonId> = graph
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .copied()
            .filter(|child| seen.insert(*child))
            .collect();

        ordered.extend_from_slice(&fresh);
        pending.extend(fresh.iter().rev());
    }

    tracing::debug!("{} has {} descendants", person, ordered.len());
    Ok(ordered)
}
