//! Optimistic query submission.
//!
//! One submission in flight at a time. Validation happens before any
//! network call; a successful POST prepends the created entry to the
//! local query list without waiting for the next sync. Status displays
//! revert to idle on a deadline rather than a timer so the controller
//! can be driven (and tested) by whoever owns the event loop.

use std::time::Instant;

use serde_json::json;

use crate::api::BackendClient;
use crate::constants::{endpoints, SUBMIT_ERROR_DISPLAY, SUBMIT_SUCCESS_DISPLAY};
use crate::models::QueryEntry;
use crate::store::PortfolioStore;

pub const VALIDATION_MESSAGE: &str = "All required fields must be filled!";
pub const SUCCESS_MESSAGE: &str = "Your query has been logged in the queue.";
pub const FAILURE_MESSAGE: &str = "Failed to send query. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// The three required form fields.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl QueryForm {
    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    pub form: QueryForm,
    status: SubmissionStatus,
    status_message: String,
    reverts_at: Option<Instant>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Submit the current form. Invalid input short-circuits to the
    /// error display without touching the network; a second submission
    /// while one is pending is ignored.
    pub async fn submit(&mut self, client: &BackendClient, store: &mut PortfolioStore) {
        if self.status == SubmissionStatus::Pending {
            return;
        }
        if !self.form.is_valid() {
            self.show(SubmissionStatus::Error, VALIDATION_MESSAGE, SUBMIT_ERROR_DISPLAY);
            return;
        }

        self.status = SubmissionStatus::Pending;
        self.status_message.clear();
        self.reverts_at = None;

        let body = json!({
            "name": self.form.name,
            "email": self.form.email,
            "query": self.form.message,
        });

        match client.post_payload(endpoints::QUERY, &body).await {
            Some(record) => {
                store.prepend_query(QueryEntry::from_value(&record));
                self.form.clear();
                self.show(SubmissionStatus::Success, SUCCESS_MESSAGE, SUBMIT_SUCCESS_DISPLAY);
            }
            None => {
                self.show(SubmissionStatus::Error, FAILURE_MESSAGE, SUBMIT_ERROR_DISPLAY);
            }
        }
    }

    /// Revert an elapsed success/error display back to idle. Call with
    /// the current instant from the owning loop.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.reverts_at {
            if now >= deadline {
                self.status = SubmissionStatus::Idle;
                self.status_message.clear();
                self.reverts_at = None;
            }
        }
    }

    fn show(&mut self, status: SubmissionStatus, message: &str, display_for: std::time::Duration) {
        self.status = status;
        self.status_message = message.to_string();
        self.reverts_at = Some(Instant::now() + display_for);
    }
}
