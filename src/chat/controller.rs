use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::transcript::Transcript;
use crate::completion::{CompletionBackend, Message, build_prompt};
use crate::session::SessionContext;

/// What a call to [`TurnController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The question and its answer were appended; the input was cleared.
    Answered,
    /// The input was empty or whitespace-only; nothing was sent.
    Ignored,
    /// Another submission is still waiting for its answer; nothing was sent.
    Busy,
    /// The request failed and was logged; transcript and input are unchanged.
    Failed,
}

#[derive(Debug, Default)]
struct ChatState {
    transcript: Transcript,
    pending: String,
}

/// Clears the in-flight flag when dropped, including on cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Mediates between the pending input and the transcript.
///
/// Each submission sends one request to the backend. Only one request may
/// be in flight at a time.
pub struct TurnController<B> {
    context: SessionContext,
    backend: B,
    state: Mutex<ChatState>,
    in_flight: AtomicBool,
}

impl<B: CompletionBackend> TurnController<B> {
    pub fn new(context: SessionContext, backend: B) -> Self {
        Self {
            context,
            backend,
            state: Mutex::new(ChatState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.lock().pending = text.into();
    }

    pub fn pending_input(&self) -> String {
        self.lock().pending.clone()
    }

    /// A snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.lock().transcript.clone()
    }

    pub fn is_awaiting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let question = self.pending_input();
        if question.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("submission ignored, a request is already in flight");
            return SubmitOutcome::Busy;
        };

        let messages = [Message::user(build_prompt(&self.context, &question))];

        match self.backend.complete(&messages).await {
            Ok(answer) => {
                let mut state = self.lock();
                state.transcript.push_exchange(question, answer);
                state.pending.clear();
                SubmitOutcome::Answered
            }
            Err(e) => {
                tracing::error!(error = %e, "completion failed, question was not added");
                SubmitOutcome::Failed
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
