//! Project form modal: a two-state machine with explicit effects, plus the
//! stateful panel that drives it against a store and a card container.

use folio_core::store::{ProjectStore, StorageBackend};
use folio_core::ProjectRecord;

use crate::render;

/// Delay before focusing the first field after open, so the open transition
/// settles visually first.
pub const FOCUS_DELAY_MS: u64 = 120;
/// Delay before scrolling a freshly inserted card into view.
pub const REVEAL_DELAY_MS: u64 = 200;
/// How long the insertion highlight stays before clearing itself.
pub const HIGHLIGHT_CLEAR_MS: u64 = 1200;

/// Blocking notice shown when a submit has a blank field.
pub const VALIDATION_MESSAGE: &str = "Please fill all fields before saving.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Raw form field values as entered, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub url: String,
    pub img: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// Explicit open action (the add-project button).
    OpenRequested,
    /// Explicit close action (close or cancel button).
    CloseRequested,
    /// Click on the backdrop outside the modal content.
    BackdropClicked,
    /// Global cancellation signal while the modal may be open.
    EscapePressed,
    /// Form submit attempt with the current field values.
    Submitted(FormInput),
}

/// Side effects requested by a transition, in execution order. Timer-bearing
/// effects are cosmetic, fire-and-forget and uncancellable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowModal,
    SuspendBackgroundScroll,
    FocusFirstField { delay_ms: u64 },
    HideModal,
    RestoreBackgroundScroll,
    ResetForm,
    /// Blocking validation notice; entered values stay intact.
    NotifyValidation(&'static str),
    /// Validated record to render, insert and persist.
    CommitProject(ProjectRecord),
    RevealNewCard { delay_ms: u64, highlight_clear_ms: u64 },
}

/// Pure transition over modal state. Events that make no sense in the current
/// state leave it unchanged with no effects.
pub fn transition(state: ModalState, event: ModalEvent) -> (ModalState, Vec<Effect>) {
    use ModalEvent::*;
    use ModalState::*;

    match (state, event) {
        (Closed, OpenRequested) => (
            Open,
            vec![
                Effect::ShowModal,
                Effect::SuspendBackgroundScroll,
                Effect::FocusFirstField { delay_ms: FOCUS_DELAY_MS },
            ],
        ),
        (Open, CloseRequested | BackdropClicked | EscapePressed) => (
            Closed,
            vec![
                Effect::HideModal,
                Effect::RestoreBackgroundScroll,
                Effect::ResetForm,
            ],
        ),
        (Open, Submitted(input)) => {
            match ProjectRecord::from_input(&input.name, &input.url, &input.img, &input.desc) {
                Some(record) => (
                    Closed,
                    vec![
                        Effect::CommitProject(record),
                        Effect::HideModal,
                        Effect::RestoreBackgroundScroll,
                        Effect::ResetForm,
                        Effect::RevealNewCard {
                            delay_ms: REVEAL_DELAY_MS,
                            highlight_clear_ms: HIGHLIGHT_CLEAR_MS,
                        },
                    ],
                ),
                None => (Open, vec![Effect::NotifyValidation(VALIDATION_MESSAGE)]),
            }
        }
        (state, _) => (state, Vec::new()),
    }
}

/// Owns the modal state, the project store and the ordered card container.
///
/// Construction hydrates prior session state: every stored record is rendered
/// and appended in order before any event is handled.
#[derive(Debug)]
pub struct ProjectPanel<B: StorageBackend> {
    state: ModalState,
    store: ProjectStore<B>,
    cards: Vec<String>,
}

impl<B: StorageBackend> ProjectPanel<B> {
    pub fn new(store: ProjectStore<B>) -> Self {
        let cards = store.load_all().iter().map(render::project_card).collect();
        Self {
            state: ModalState::Closed,
            store,
            cards,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Rendered cards in display order.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Run one event through the state machine and interpret its commit
    /// effect, if any. The full effect list is returned so the embedding
    /// layer can play out the cosmetic ones.
    pub fn handle(&mut self, event: ModalEvent) -> Vec<Effect> {
        let (next, effects) = transition(self.state, event);
        self.state = next;
        for effect in &effects {
            if let Effect::CommitProject(record) = effect {
                // Render before persisting; a failed save never rolls the
                // card back out of the container.
                self.cards.push(render::project_card(record));
                self.store.append(record.clone());
                tracing::debug!(name = %record.name, "project committed");
            }
        }
        effects
    }
}
