//! Content synchronization.
//!
//! One independent fetch-and-apply per entity kind: the six fetches are
//! issued concurrently, and each outcome is applied on its own - a
//! backend outage for one section degrades that section to its bundled
//! default content without touching the others. Each fetch runs under a
//! bounded retry policy with exponential backoff and a per-attempt
//! timeout.

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;

use crate::api::BackendClient;
use crate::models::{ArtEntry, ExperienceEntry, Profile, ProjectEntry, QueryEntry, SkillEntry};
use crate::store::{EntityKind, PortfolioStore};

/// Retry/timeout policy for one resource fetch.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Deadline per attempt.
    pub attempt_timeout: Duration,
    /// Delay before the second attempt; doubles each retry.
    pub backoff_base: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(10),
            backoff_base: Duration::from_millis(250),
        }
    }
}

impl FetchPolicy {
    /// Single attempt, no waiting. Used by tests and impatient callers.
    pub fn one_shot() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    fn backoff_for(&self, completed_attempts: u32) -> Duration {
        self.backoff_base * 2u32.saturating_pow(completed_attempts.saturating_sub(1))
    }
}

/// Drive one fetch operation under a policy. `None` from the operation
/// counts as a failed attempt; the final `None` means every attempt was
/// exhausted.
pub async fn fetch_with_retry<F, Fut>(policy: &FetchPolicy, mut op: F) -> Option<Value>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<Value>>,
{
    for attempt in 1..=policy.max_attempts.max(1) {
        match tokio::time::timeout(policy.attempt_timeout, op()).await {
            Ok(Some(payload)) => return Some(payload),
            Ok(None) => {}
            Err(_) => {
                tracing::warn!(attempt, "fetch attempt timed out");
            }
        }
        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.backoff_for(attempt)).await;
        }
    }
    None
}

/// Orchestrates the six per-kind sync operations against a store.
pub struct SyncController {
    client: BackendClient,
    policy: FetchPolicy,
}

impl SyncController {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            policy: FetchPolicy::default(),
        }
    }

    pub fn with_policy(client: BackendClient, policy: FetchPolicy) -> Self {
        Self { client, policy }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Fetch all six kinds concurrently and apply each result
    /// independently. Called once at startup; calling it again acts as
    /// a refresh with the same semantics.
    pub async fn sync_all(&self, store: &mut PortfolioStore) {
        let fetches = EntityKind::ALL.map(|kind| {
            let client = self.client.clone();
            async move {
                let payload = fetch_with_retry(&self.policy, move || {
                    let client = client.clone();
                    async move { client.fetch_payload(kind.endpoint()).await }
                })
                .await;
                (kind, payload)
            }
        });

        for (kind, payload) in join_all(fetches).await {
            self.apply(store, kind, payload);
        }
    }

    /// Apply one fetch outcome. Absent payloads - and, for list kinds,
    /// payloads that are not a sequence - leave the local state
    /// untouched.
    pub fn apply(&self, store: &mut PortfolioStore, kind: EntityKind, payload: Option<Value>) {
        let api_url = self.client.api_url();
        match kind {
            EntityKind::Profile => {
                let Some(record) = payload.filter(Value::is_object) else {
                    store.mark_failed(kind);
                    return;
                };
                store.set_profile(Profile::from_value(&record, api_url));
            }
            EntityKind::Skill => {
                let Some(records) = as_sequence(payload) else {
                    store.mark_failed(kind);
                    return;
                };
                store.replace_skills(records.iter().map(SkillEntry::from_value).collect());
            }
            EntityKind::Project => {
                let Some(records) = as_sequence(payload) else {
                    store.mark_failed(kind);
                    return;
                };
                store.replace_projects(records.iter().map(ProjectEntry::from_value).collect());
            }
            EntityKind::Experience => {
                let Some(records) = as_sequence(payload) else {
                    store.mark_failed(kind);
                    return;
                };
                store.replace_experiences(records.iter().map(ExperienceEntry::from_value).collect());
            }
            EntityKind::Art => {
                let Some(records) = as_sequence(payload) else {
                    store.mark_failed(kind);
                    return;
                };
                store.replace_art(
                    records
                        .iter()
                        .map(|record| ArtEntry::from_value(record, api_url))
                        .collect(),
                );
            }
            EntityKind::Query => {
                let Some(records) = as_sequence(payload) else {
                    store.mark_failed(kind);
                    return;
                };
                store.merge_queries(records.iter().map(QueryEntry::from_value).collect());
            }
        }
        store.mark_ready(kind);
    }
}

fn as_sequence(payload: Option<Value>) -> Option<Vec<Value>> {
    match payload {
        Some(Value::Array(records)) => Some(records),
        _ => None,
    }
}
