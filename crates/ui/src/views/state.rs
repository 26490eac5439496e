use std::future::Future;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use quiz_core::Screen;
use services::{SessionError, SessionSnapshot};

use crate::context::AppContext;
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidEmail,
    AttemptInProgress,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidEmail => "Please enter your email address.",
            ViewError::AttemptInProgress => "A quiz is already in progress.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    /// `Ready` when `data` is present, `Loading` otherwise.
    #[must_use]
    pub fn from_option(data: Option<T>) -> Self {
        data.map_or(ViewState::Loading, ViewState::Ready)
    }
}

/// Latest session snapshot as a signal, refreshed whenever the session publishes.
pub fn use_session_snapshot() -> Signal<SessionSnapshot> {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    let mut snapshot = use_signal(|| session.snapshot());

    use_future(move || {
        let mut updates = session.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    snapshot
}

/// Screen this view may actually show; redirects when the session says otherwise.
pub fn use_screen_guard(requested: Screen, snapshot: Signal<SessionSnapshot>) -> Screen {
    let navigator = use_navigator();

    use_effect(move || {
        let target = snapshot.read().screen_for(requested);
        if target != requested {
            navigator.replace(Route::from(target));
        }
    });

    snapshot.read().screen_for(requested)
}

/// Run a session command in the background, surfacing failures through `error`.
pub fn run_action<T, F>(mut error: Signal<Option<ViewError>>, action: F)
where
    T: 'static,
    F: Future<Output = Result<T, SessionError>> + 'static,
{
    spawn(async move {
        match action.await {
            Ok(_) => error.set(None),
            Err(err) => {
                warn!(error = %err, "quiz action failed");
                error.set(Some(ViewError::Unknown));
            }
        }
    });
}
