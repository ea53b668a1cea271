//! Scheduling engine.
//!
//! Owns the authoritative in-memory event collection and the single-focus
//! edit session, sequences validation, store writes, and notification
//! dispatch, and exposes the reconciled view of events and holidays.
//!
//! Per-operation state machine:
//! `Idle -> Validating -> (Rejected | Persisting) -> (Failed | Committed)`,
//! always ending back at `Idle`. Validation completes before any store call;
//! the store call completes before the collection is mutated; dispatch is
//! issued only after a create has been confirmed, and runs detached.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::auth::AuthProvider;
use crate::directory::ParticipantDirectory;
use crate::error::{AppError, AppResult};
use crate::holidays;
use crate::models::{CalendarEntry, Event, EventDraft, Holiday, Participant};
use crate::notify::{self, EventNotice, Notifier};
use crate::store::EventStore;

/// What the current edit session targets.
///
/// Create-vs-update is carried by this tag, never inferred from an optional
/// id on the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    New,
    EditingExisting(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Validating,
    Rejected,
    Persisting,
    Failed,
    Committed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Validating => "Validating",
            Phase::Rejected => "Rejected",
            Phase::Persisting => "Persisting",
            Phase::Failed => "Failed",
            Phase::Committed => "Committed",
        };
        f.write_str(name)
    }
}

fn transition(operation: &str, phase: Phase) {
    log::debug!("[Engine] {} -> {}", operation, phase);
}

pub struct SchedulingEngine {
    store: Arc<dyn EventStore>,
    directory: Arc<dyn ParticipantDirectory>,
    notifier: Arc<dyn Notifier>,
    auth: Arc<dyn AuthProvider>,
    // Interior state behind short mutex sections, never held across an
    // await, so unrelated operations are not serialized against each other.
    events: Mutex<Vec<Event>>,
    participants: Mutex<Vec<Participant>>,
    session: Mutex<Option<Draft>>,
    persisting: Mutex<HashSet<String>>,
}

impl SchedulingEngine {
    pub fn new(
        store: Arc<dyn EventStore>,
        directory: Arc<dyn ParticipantDirectory>,
        notifier: Arc<dyn Notifier>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            store,
            directory,
            notifier,
            auth,
            events: Mutex::new(Vec::new()),
            participants: Mutex::new(Vec::new()),
            session: Mutex::new(None),
            persisting: Mutex::new(HashSet::new()),
        }
    }

    /// Loads the participant directory and the stored event collection.
    ///
    /// A directory failure degrades to the previous (possibly empty)
    /// candidate list and never blocks event operations. A store failure
    /// leaves the collection unchanged and is surfaced to the caller.
    pub async fn load(&self) -> AppResult<()> {
        let token = self.auth.token();
        match self.directory.list_participants(&token).await {
            Ok(users) => {
                log::info!("Loaded {} directory participants", users.len());
                *self.participants.lock().unwrap() = users;
            }
            Err(e) => {
                log::warn!("Participant directory unavailable, keeping candidates: {}", e);
            }
        }

        match self.store.list_events().await {
            Ok(stored) => {
                log::info!("Loaded {} stored events", stored.len());
                *self.events.lock().unwrap() = stored;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load stored events: {}", e);
                Err(e)
            }
        }
    }

    /// The reconciled view: stored events plus the holiday overlay, ordered
    /// by start instant. Holidays are present regardless of store state.
    pub fn view(&self) -> Vec<CalendarEntry> {
        let mut entries: Vec<CalendarEntry> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(CalendarEntry::Event)
            .collect();
        entries.extend(holidays::list_holidays().into_iter().map(CalendarEntry::Holiday));
        entries.sort_by_key(|entry| entry.starts_at());
        entries
    }

    /// Current participant selection candidates.
    pub fn participants(&self) -> Vec<Participant> {
        self.participants.lock().unwrap().clone()
    }

    /// Snapshot of the authoritative event collection.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Starts a create session seeded with the selected calendar date.
    /// Any previous unsaved draft is discarded.
    pub fn begin_create(&self, date: NaiveDate) -> EventDraft {
        let mut session = self.session.lock().unwrap();
        if session.is_some() {
            log::debug!("[Engine] discarding previous draft for new create session");
        }
        *session = Some(Draft::New);
        EventDraft {
            date: Some(date),
            ..EventDraft::default()
        }
    }

    /// Starts an edit session for the stored event `id`, returning its
    /// current fields. Holiday entries and unknown ids are not editable;
    /// the request is ignored and the session is left as it was.
    pub fn begin_edit(&self, id: &str) -> Option<EventDraft> {
        if Holiday::is_holiday_id(id) {
            log::debug!("[Engine] ignoring edit request for holiday entry {}", id);
            return None;
        }

        let draft = {
            let events = self.events.lock().unwrap();
            let event = events.iter().find(|e| e.id.as_deref() == Some(id))?;
            EventDraft {
                name: event.name.clone(),
                time: event.time_label(),
                description: event.description.clone(),
                date: Some(event.start_at.date_naive()),
                priority: Some(event.priority),
                participants: event.participants.clone(),
            }
        };

        let mut session = self.session.lock().unwrap();
        if session.is_some() {
            log::debug!("[Engine] discarding previous draft to edit {}", id);
        }
        *session = Some(Draft::EditingExisting(id.to_string()));
        Some(draft)
    }

    /// Discards the edit session. Any store call already in flight is not
    /// aborted; only local form state is dropped.
    pub fn cancel(&self) {
        *self.session.lock().unwrap() = None;
    }

    /// The active session tag, if any.
    pub fn session(&self) -> Option<Draft> {
        self.session.lock().unwrap().clone()
    }

    /// Submits the draft fields through the active session.
    ///
    /// Rejection surfaces the first missing field and makes no store call;
    /// the session survives so the user can correct and resubmit. On commit
    /// the session is cleared and the committed record returned.
    pub async fn submit(&self, fields: EventDraft) -> AppResult<Event> {
        let draft = self
            .session
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::operation_failed("no event submission in progress"))?;

        match draft {
            Draft::New => self.submit_create(fields).await,
            Draft::EditingExisting(id) => self.submit_update(&id, fields).await,
        }
    }

    async fn submit_create(&self, fields: EventDraft) -> AppResult<Event> {
        transition("create", Phase::Validating);
        if let Err(e) = fields.validate() {
            transition("create", Phase::Rejected);
            return Err(e);
        }

        let principal = self.auth.principal();
        let mut event = fields.into_event(&principal.id)?;

        transition("create", Phase::Persisting);
        match self.store.create_event(&event).await {
            Ok(id) => {
                event.id = Some(id);
                self.events.lock().unwrap().push(event.clone());
                *self.session.lock().unwrap() = None;
                transition("create", Phase::Committed);

                // Detached: a failed alert is logged and absorbed, and the
                // committed create is never unwound by it.
                let _ = notify::spawn_dispatch(
                    self.notifier.clone(),
                    self.auth.token(),
                    EventNotice::for_event(&event),
                );
                Ok(event)
            }
            Err(e) => {
                transition("create", Phase::Failed);
                log::error!("Create failed, collection unchanged: {}", e);
                Err(e)
            }
        }
    }

    async fn submit_update(&self, id: &str, fields: EventDraft) -> AppResult<Event> {
        if Holiday::is_holiday_id(id) {
            log::warn!("[Engine] ignoring update request for holiday entry {}", id);
            return Err(AppError::operation_failed("Holiday entries cannot be modified."));
        }

        transition("update", Phase::Validating);
        if let Err(e) = fields.validate() {
            transition("update", Phase::Rejected);
            return Err(e);
        }

        // creator_id is set once at creation; a full-replacement update
        // carries the original creator forward.
        let creator_id = {
            let events = self.events.lock().unwrap();
            events
                .iter()
                .find(|e| e.id.as_deref() == Some(id))
                .map(|e| e.creator_id.clone())
                .unwrap_or_else(|| self.auth.principal().id)
        };

        let mut event = fields.into_event(&creator_id)?;
        event.id = Some(id.to_string());

        self.claim(id)?;
        transition("update", Phase::Persisting);
        let result = self.store.update_event(id, &event).await;
        self.release(id);

        match result {
            Ok(()) => {
                {
                    let mut events = self.events.lock().unwrap();
                    match events.iter_mut().find(|e| e.id.as_deref() == Some(id)) {
                        Some(existing) => *existing = event.clone(),
                        None => events.push(event.clone()),
                    }
                }
                *self.session.lock().unwrap() = None;
                transition("update", Phase::Committed);
                Ok(event)
            }
            Err(e) => {
                transition("update", Phase::Failed);
                log::error!("Update of {} failed, collection unchanged: {}", id, e);
                Err(e)
            }
        }
    }

    /// Deletes the stored event `id`.
    ///
    /// Holiday entries are ignored. Deleting an id the store no longer has
    /// is logged and treated as success; the local record is dropped either
    /// way.
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        if Holiday::is_holiday_id(id) {
            log::debug!("[Engine] ignoring delete request for holiday entry {}", id);
            return Ok(());
        }

        self.claim(id)?;
        transition("delete", Phase::Persisting);
        let result = self.store.delete_event(id).await;
        self.release(id);

        match result {
            Ok(()) => {}
            Err(AppError::NotFound(_)) => {
                log::warn!("Delete of {}: already gone remotely", id);
            }
            Err(e) => {
                transition("delete", Phase::Failed);
                log::error!("Delete of {} failed, collection unchanged: {}", id, e);
                return Err(e);
            }
        }

        self.events
            .lock()
            .unwrap()
            .retain(|e| e.id.as_deref() != Some(id));
        transition("delete", Phase::Committed);
        Ok(())
    }

    // One in-flight store write per event id. A second mutation of the same
    // id fails fast instead of queueing; unrelated ids proceed concurrently.
    fn claim(&self, id: &str) -> AppResult<()> {
        let mut persisting = self.persisting.lock().unwrap();
        if !persisting.insert(id.to_string()) {
            return Err(AppError::operation_failed(
                "Another operation on this event is still in progress.",
            ));
        }
        Ok(())
    }

    fn release(&self, id: &str) {
        self.persisting.lock().unwrap().remove(id);
    }
}
