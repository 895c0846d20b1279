//! Recording presenter for tests and headless runs.
//!
//! Keeps every event in emission order behind a shared handle, so a test
//! can hand one clone to the controller and inspect another.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::intake::{PresentationEvent, ReviewItem, ViewPosition};
use crate::ports::Presenter;

/// Presenter that records instead of rendering.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<PresentationEvent>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far.
    pub fn events(&self) -> Vec<PresentationEvent> {
        self.lock().clone()
    }

    /// Drains and returns the recorded events.
    pub fn take(&self) -> Vec<PresentationEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, event: &PresentationEvent) -> bool {
        self.lock().iter().any(|e| e == event)
    }

    pub fn last(&self) -> Option<PresentationEvent> {
        self.lock().last().cloned()
    }

    /// Bot and user message texts, in order.
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::ShowMessage { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Indices of every question shown, in order.
    pub fn shown_questions(&self) -> Vec<usize> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::ShowQuestion { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Question indices reopened by back navigation, in order.
    pub fn retractions(&self) -> Vec<usize> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::RetractLastExchange { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// The most recent review list and the view it was shown at.
    pub fn last_review_list(&self) -> Option<(Vec<ReviewItem>, ViewPosition)> {
        self.lock().iter().rev().find_map(|e| match e {
            PresentationEvent::ShowReviewList { items, view, .. } => Some((items.clone(), *view)),
            _ => None,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PresentationEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Presenter for RecordingPresenter {
    fn present(&self, event: PresentationEvent) {
        self.lock().push(event);
    }
}
