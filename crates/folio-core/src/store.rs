//! Local portfolio state - single source of truth for everything the
//! views render.
//!
//! Seeded from the bundled defaults, then updated by the sync
//! controller (wholesale per kind) and the submission controller
//! (query prepend). The two query-list writers use disjoint operations
//! (id-union merge vs prepend) so neither can clobber the other.

use std::collections::HashSet;

use crate::defaults;
use crate::models::{ArtEntry, ExperienceEntry, Profile, ProjectEntry, QueryEntry, SkillEntry};

/// The six synchronized content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Profile,
    Skill,
    Project,
    Experience,
    Art,
    Query,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Profile,
        EntityKind::Skill,
        EntityKind::Project,
        EntityKind::Experience,
        EntityKind::Art,
        EntityKind::Query,
    ];

    pub fn endpoint(self) -> &'static str {
        use crate::constants::endpoints;
        match self {
            EntityKind::Profile => endpoints::INTRO,
            EntityKind::Skill => endpoints::SKILL,
            EntityKind::Project => endpoints::PROJECT,
            EntityKind::Experience => endpoints::EXPERIENCE,
            EntityKind::Art => endpoints::ART,
            EntityKind::Query => endpoints::QUERY,
        }
    }
}

/// Sync state of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceState {
    /// No sync attempt has completed yet; defaults are showing.
    #[default]
    Pending,
    /// Last sync succeeded; backend content is showing.
    Ready,
    /// A refresh failed after an earlier success; the previously synced
    /// content is still showing.
    Stale,
    /// Every sync attempt so far has failed; defaults are showing.
    Failed,
}

#[derive(Debug, Clone)]
pub struct PortfolioStore {
    pub profile: Profile,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub experiences: Vec<ExperienceEntry>,
    pub art: Vec<ArtEntry>,
    pub queries: Vec<QueryEntry>,
    states: [ResourceState; 6],
}

impl Default for PortfolioStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PortfolioStore {
    /// Store seeded with the bundled dataset; every resource starts
    /// `Pending`.
    pub fn with_defaults() -> Self {
        Self {
            profile: defaults::profile(),
            skills: defaults::skills(),
            projects: defaults::projects(),
            experiences: defaults::experiences(),
            art: defaults::art(),
            queries: defaults::queries(),
            states: [ResourceState::Pending; 6],
        }
    }

    pub fn state(&self, kind: EntityKind) -> ResourceState {
        self.states[Self::index(kind)]
    }

    pub fn mark_ready(&mut self, kind: EntityKind) {
        self.states[Self::index(kind)] = ResourceState::Ready;
    }

    /// Record a failed sync: `Stale` if the resource had synced before,
    /// `Failed` otherwise. The content itself is untouched either way.
    pub fn mark_failed(&mut self, kind: EntityKind) {
        let slot = &mut self.states[Self::index(kind)];
        *slot = match *slot {
            ResourceState::Ready | ResourceState::Stale => ResourceState::Stale,
            _ => ResourceState::Failed,
        };
    }

    fn index(kind: EntityKind) -> usize {
        EntityKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    pub fn replace_skills(&mut self, skills: Vec<SkillEntry>) {
        self.skills = skills;
    }

    pub fn replace_projects(&mut self, projects: Vec<ProjectEntry>) {
        self.projects = projects;
    }

    pub fn replace_experiences(&mut self, experiences: Vec<ExperienceEntry>) {
        self.experiences = experiences;
    }

    pub fn replace_art(&mut self, art: Vec<ArtEntry>) {
        self.art = art;
    }

    /// Reconcile a synced query snapshot with the local list by id
    /// union. Locally known entries the snapshot does not contain
    /// (optimistic submissions the backend has not echoed back yet)
    /// survive at the head of the list; everything else is taken from
    /// the snapshot.
    pub fn merge_queries(&mut self, incoming: Vec<QueryEntry>) {
        let incoming_ids: HashSet<&str> = incoming.iter().map(|q| q.id.as_str()).collect();
        let mut merged: Vec<QueryEntry> = self
            .queries
            .iter()
            .filter(|q| !incoming_ids.contains(q.id.as_str()))
            .cloned()
            .collect();
        merged.extend(incoming);
        self.queries = merged;
    }

    /// Optimistic path: a just-submitted query goes straight to the top.
    pub fn prepend_query(&mut self, query: QueryEntry) {
        self.queries.insert(0, query);
    }

    /// Experience rows sorted for display: most recent year range first.
    /// Storage order stays arrival order.
    pub fn experiences_by_recency(&self) -> Vec<&ExperienceEntry> {
        let mut rows: Vec<&ExperienceEntry> = self.experiences.iter().collect();
        rows.sort_by(|a, b| b.year_range.cmp(&a.year_range));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(id: &str, name: &str) -> QueryEntry {
        QueryEntry {
            id: id.into(),
            name: name.into(),
            email: format!("{name}@x.com"),
            message: "hi".into(),
        }
    }

    #[test]
    fn seeded_store_is_renderable_before_any_sync() {
        let store = PortfolioStore::with_defaults();
        assert!(!store.profile.name.is_empty());
        assert!(!store.skills.is_empty());
        assert!(store.queries.is_empty());
        assert_eq!(store.state(EntityKind::Skill), ResourceState::Pending);
    }

    #[test]
    fn failure_marking_depends_on_sync_history() {
        let mut store = PortfolioStore::with_defaults();
        store.mark_failed(EntityKind::Project);
        assert_eq!(store.state(EntityKind::Project), ResourceState::Failed);

        store.mark_ready(EntityKind::Project);
        store.mark_failed(EntityKind::Project);
        assert_eq!(store.state(EntityKind::Project), ResourceState::Stale);
    }

    #[test]
    fn merge_keeps_unconfirmed_optimistic_entries_on_top() {
        let mut store = PortfolioStore::with_defaults();
        store.prepend_query(query("local-1", "Optimist"));

        store.merge_queries(vec![query("srv-1", "A"), query("srv-2", "B")]);
        let ids: Vec<&str> = store.queries.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["local-1", "srv-1", "srv-2"]);
    }

    #[test]
    fn merge_dedupes_once_the_backend_echoes_an_entry() {
        let mut store = PortfolioStore::with_defaults();
        store.prepend_query(query("srv-1", "A"));

        store.merge_queries(vec![query("srv-1", "A"), query("srv-2", "B")]);
        let ids: Vec<&str> = store.queries.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["srv-1", "srv-2"]);
    }

    #[test]
    fn experience_view_sorts_descending_without_reordering_storage() {
        let store = PortfolioStore::with_defaults();
        let view: Vec<&str> = store
            .experiences_by_recency()
            .iter()
            .map(|e| e.year_range.as_str())
            .collect();
        assert_eq!(view, vec!["2025-2026", "2024-2025", "2021-2023"]);
        // Storage order untouched.
        assert_eq!(store.experiences[0].year_range, "2021-2023");
    }
}
