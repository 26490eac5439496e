use std::fmt;

use tokio::sync::{mpsc, oneshot, watch};

use quiz_core::model::UserIdentity;
use quiz_core::{Direction, Outcome};

use super::runtime::Command;
use super::snapshot::SessionSnapshot;
use crate::error::SessionError;

/// Cloneable entry point to a running quiz session.
///
/// Every method enqueues one command and resolves once the session runtime has
/// applied it and published the resulting snapshot.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        snapshots: watch::Receiver<SessionSnapshot>,
    ) -> Self {
        Self {
            commands,
            snapshots,
        }
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified whenever a new snapshot is published.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until a published snapshot satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime stops first.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&SessionSnapshot) -> bool,
    ) -> Result<SessionSnapshot, SessionError> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(predicate)
            .await
            .map_err(|_| SessionError::Closed)?;
        Ok(snapshot.clone())
    }

    /// Set the identity and start a fresh attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime has stopped.
    pub async fn begin(&self, identity: UserIdentity) -> Result<Outcome, SessionError> {
        self.request(|reply| Command::Begin { identity, reply }).await
    }

    /// Validate `email` and `begin` with it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Rejected` if `email` is blank and
    /// `SessionError::Closed` if the runtime has stopped.
    pub async fn begin_with_email(&self, email: &str) -> Result<Outcome, SessionError> {
        let identity = UserIdentity::new(email)?;
        self.begin(identity).await
    }

    /// Fetch and install the question batch.
    ///
    /// Returns `Outcome::Ignored` if a fetch is already in flight, questions are
    /// already installed, or no identity is set. `Outcome::Applied` means the
    /// fetch has started; watch the snapshot for its completion.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime has stopped.
    pub async fn load(&self) -> Result<Outcome, SessionError> {
        self.request(|reply| Command::Load { reply }).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::Rejected` for an out-of-range index and
    /// `SessionError::Closed` if the runtime has stopped.
    pub async fn navigate_to(&self, index: usize) -> Result<Outcome, SessionError> {
        Ok(self
            .request(|reply| Command::Navigate { index, reply })
            .await??)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime has stopped.
    pub async fn step(&self, direction: Direction) -> Result<Outcome, SessionError> {
        self.request(|reply| Command::Step { direction, reply }).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::Rejected` for an out-of-range index and
    /// `SessionError::Closed` if the runtime has stopped.
    pub async fn record_answer(
        &self,
        index: usize,
        answer: impl Into<String>,
    ) -> Result<Outcome, SessionError> {
        let answer = answer.into();
        Ok(self
            .request(|reply| Command::Answer {
                index,
                answer,
                reply,
            })
            .await??)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime has stopped.
    pub async fn submit(&self) -> Result<Outcome, SessionError> {
        self.request(|reply| Command::Submit { reply }).await
    }

    /// Abandon the attempt and clear questions and identity.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime has stopped.
    pub async fn reset(&self) -> Result<(), SessionError> {
        self.request(|reply| Command::Reset { reply }).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::Closed` if the runtime has stopped.
    pub async fn dismiss_notice(&self) -> Result<(), SessionError> {
        self.request(|reply| Command::DismissNotice { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, SessionError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshots.borrow();
        f.debug_struct("SessionHandle")
            .field("questions", &snapshot.questions().len())
            .field("current", &snapshot.session().current_index())
            .field("submitted", &snapshot.is_submitted())
            .field("loading", &snapshot.is_loading())
            .finish_non_exhaustive()
    }
}
