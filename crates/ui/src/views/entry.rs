use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use quiz_core::{Outcome, Screen};
use services::SessionError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, run_action, use_screen_guard, use_session_snapshot};

/// Only a freshly applied `begin` moves on to the quiz.
fn start_outcome(result: Result<Outcome, SessionError>) -> Result<(), ViewError> {
    match result {
        Ok(Outcome::Applied) => Ok(()),
        Ok(Outcome::Ignored) => {
            warn!("quiz attempt already in progress");
            Err(ViewError::AttemptInProgress)
        }
        Err(SessionError::Rejected(err)) => {
            warn!(error = %err, "rejected quiz identity");
            Err(ViewError::InvalidEmail)
        }
        Err(err) => {
            warn!(error = %err, "failed to start quiz");
            Err(ViewError::Unknown)
        }
    }
}

#[component]
pub fn EntryView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let snapshot = use_session_snapshot();
    let _ = use_screen_guard(Screen::Entry, snapshot);

    let mut email = use_signal(String::new);
    let mut starting = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let notice = snapshot.read().notice();
    let can_start = !email.read().trim().is_empty() && !starting();
    let question_count = ctx.question_count();
    let minutes = ctx.time_limit_minutes();

    let session = ctx.session();
    let start = move |_: MouseEvent| {
        let session = session.clone();
        let typed = email.read().clone();
        starting.set(true);
        spawn(async move {
            match start_outcome(session.begin_with_email(&typed).await) {
                Ok(()) => {
                    error.set(None);
                    navigator.push(Route::Quiz {});
                }
                Err(err) => error.set(Some(err)),
            }
            starting.set(false);
        });
    };

    let session = ctx.session();
    let dismiss = move |_: MouseEvent| {
        let session = session.clone();
        run_action(error, async move { session.dismiss_notice().await });
    };

    rsx! {
        div { class: "page entry",
            div { class: "entry-card",
                h1 { "Quiz Challenge" }
                p { class: "entry-subtitle",
                    "Test your knowledge with {question_count} questions in {minutes} minutes"
                }

                if let Some(notice) = notice {
                    div { class: "notice", role: "alert",
                        p { "{notice.message()}" }
                        button {
                            class: "btn notice-dismiss",
                            r#type: "button",
                            onclick: dismiss,
                            "OK"
                        }
                    }
                }

                label { r#for: "email", "Email Address" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_start,
                    onclick: start,
                    if starting() { "Starting Quiz..." } else { "Start Quiz" }
                }

                if let Some(err) = error() {
                    p { class: "error", "{err.message()}" }
                }
            }
        }
    }
}
