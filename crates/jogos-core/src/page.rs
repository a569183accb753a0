//! Page controller for the game form.
//!
//! Owns the [`FormState`] plus the page-level state machine
//! (`Loading → Ready`), and provides the two halves of each async
//! operation separately so frontends can keep the fetch or save in flight
//! while still handling input:
//!
//! - [`GameFormPage::open`] / [`GameFormPage::finish_load`] for the loader.
//! - [`GameFormPage::begin_submit`] / [`GameFormPage::finish_submit`] for
//!   the submission handler.
//!
//! [`GameFormPage::load`] and [`GameFormPage::submit`] drive a whole
//! operation against a [`GameApi`] when nothing else needs to interleave.

use tracing::{debug, error, info};

use crate::api::{ApiError, GameApi};
use crate::form::{Field, FormState};
use crate::record::{GameFields, GameRecord};
use crate::route::{LISTING_ROUTE, Navigator};

/// Create or edit, decided solely by the presence of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "CRIAR PRODUTO",
            FormMode::Edit(_) => "EDITAR PRODUTO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// Waiting for the record of the current identifier.
    Loading,
    /// The form is interactive.
    Ready,
}

/// Handle for one fetch. Stale once the page is reopened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    id: String,
}

impl LoadTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A save the caller must send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub mode: FormMode,
    pub fields: GameFields,
}

impl SaveRequest {
    pub async fn send<A: GameApi>(&self, api: &A) -> Result<(), ApiError> {
        match &self.mode {
            FormMode::Edit(id) => api.update_game(id, &self.fields).await,
            FormMode::Create => api.create_game(&self.fields).await,
        }
    }
}

/// What the frontend should do after a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(&'static str),
    Stay,
}

#[derive(Debug, Clone)]
pub struct GameFormPage {
    mode: FormMode,
    phase: PagePhase,
    form: FormState,
    saving: bool,
    generation: u64,
}

impl Default for GameFormPage {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            phase: PagePhase::Ready,
            form: FormState::default(),
            saving: false,
            generation: 0,
        }
    }
}

impl GameFormPage {
    /// A page in create mode with the empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page already opened for `id`, so edit mode starts out `Loading`.
    ///
    /// The ticket is discarded: the caller still sends the id through
    /// [`open`](Self::open) to start the fetch.
    pub fn opened(id: Option<String>) -> Self {
        let mut page = Self::new();
        page.open(id);
        page
    }

    #[cfg(test)]
    fn with_form(mut self, form: FormState) -> Self {
        self.form = form;
        self
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PagePhase::Loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn values(&self) -> &GameFields {
        self.form.values()
    }

    /// Submission is refused while loading or while a save is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase == PagePhase::Ready && !self.saving
    }

    // ------------------------------------------------------------------
    // Record loader
    // ------------------------------------------------------------------

    /// (Re)open the page for an optional identifier.
    ///
    /// Resets to the empty record. In edit mode the page enters
    /// [`PagePhase::Loading`] and the returned ticket must be passed to
    /// [`finish_load`](Self::finish_load) with the fetch result. Create
    /// mode needs no fetch and returns `None`.
    pub fn open(&mut self, id: Option<String>) -> Option<LoadTicket> {
        self.generation += 1;
        self.mode = FormMode::from_id(id);
        self.form.reinitialize(GameFields::default());
        self.saving = false;

        match &self.mode {
            FormMode::Create => {
                self.phase = PagePhase::Ready;
                None
            }
            FormMode::Edit(id) => {
                self.phase = PagePhase::Loading;
                Some(LoadTicket {
                    generation: self.generation,
                    id: id.clone(),
                })
            }
        }
    }

    /// Whether a ticket still belongs to the current identifier.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a fetch result. Returns `false` when the ticket was stale and
    /// nothing changed.
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<GameRecord, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(id = %ticket.id, "Discarding stale record load");
            return false;
        }

        match result {
            Ok(record) => {
                info!(id = %ticket.id, "Loaded game record");
                self.form.reinitialize(record.fields);
            }
            Err(e) => {
                error!(id = %ticket.id, error = %e, "Failed to load game record");
            }
        }
        self.phase = PagePhase::Ready;
        true
    }

    /// Open the page and, in edit mode, fetch and apply the record.
    pub async fn load<A: GameApi>(&mut self, api: &A, id: Option<String>) {
        if let Some(ticket) = self.open(id) {
            let result = api.fetch_game(ticket.id()).await;
            self.finish_load(&ticket, result);
        }
    }

    // ------------------------------------------------------------------
    // Form state
    // ------------------------------------------------------------------

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    pub fn touch(&mut self, field: Field) {
        self.form.touch(field);
    }

    // ------------------------------------------------------------------
    // Submission handler
    // ------------------------------------------------------------------

    /// Start a save of the current values.
    ///
    /// Returns `None` when submission is not allowed right now or when the
    /// validator rejected the values. Otherwise the page is marked as
    /// saving until [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Option<SaveRequest> {
        if !self.can_submit() {
            debug!(phase = ?self.phase, saving = self.saving, "Ignoring submit");
            return None;
        }
        let fields = self.form.submit().ok()?;
        self.saving = true;
        Some(SaveRequest {
            mode: self.mode.clone(),
            fields,
        })
    }

    /// Apply a save result. Values are left untouched either way.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.saving = false;
        match result {
            Ok(()) => {
                info!(id = ?self.mode.id(), "Saved game record");
                SubmitOutcome::Navigate(LISTING_ROUTE)
            }
            Err(e) => {
                error!(id = ?self.mode.id(), error = %e, "Failed to save game record");
                SubmitOutcome::Stay
            }
        }
    }

    /// Save the current values and navigate to the listing on success.
    pub async fn submit<A: GameApi, N: Navigator>(&mut self, api: &A, nav: &N) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::Stay;
        };
        let result = request.send(api).await;
        let outcome = self.finish_submit(result);
        if let SubmitOutcome::Navigate(route) = outcome {
            nav.push(route);
        }
        outcome
    }
}
