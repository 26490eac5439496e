use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use quiz_core::Screen;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, use_screen_guard, use_session_snapshot};
use crate::vm::{ResultDetailVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let snapshot = use_session_snapshot();
    let screen = use_screen_guard(Screen::Results, snapshot);
    let mut error = use_signal(|| None::<ViewError>);

    let state = if screen != Screen::Results {
        ViewState::Idle
    } else if let Some(err) = error() {
        ViewState::Error(err)
    } else {
        ViewState::from_option(map_results(&snapshot.read()))
    };

    let session = ctx.session();
    let take_another = move |_: MouseEvent| {
        let session = session.clone();
        spawn(async move {
            match session.reset().await {
                Ok(()) => {
                    navigator.push(Route::Entry {});
                }
                Err(err) => {
                    warn!(error = %err, "failed to reset quiz");
                    error.set(Some(ViewError::Unknown));
                }
            }
        });
    };

    rsx! {
        div { class: "page results",
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading results..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "results-header",
                        h1 { "Quiz Results" }
                        div { class: "results-stats",
                            div { class: "stat",
                                div { class: "{vm.band_class}", "{vm.score_label}" }
                                div { class: "stat-label", "{vm.percentage_label}" }
                            }
                            div { class: "stat",
                                div { class: "stat-value", "{vm.time_spent}" }
                                div { class: "stat-label", "Time Spent" }
                            }
                            div { class: "stat",
                                div { class: "stat-value stat-email", "{vm.email}" }
                                div { class: "stat-label", "Email" }
                            }
                        }
                    }
                    h2 { "Question Details" }
                    div { class: "results-details",
                        for detail in vm.details {
                            ResultDetail { key: "{detail.number}", detail }
                        }
                    }
                    div { class: "results-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: take_another,
                            "Take Another Quiz"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ResultDetail(detail: ResultDetailVm) -> Element {
    let answer_class = match (&detail.user_answer, detail.is_correct) {
        (None, _) => "answer answer-missing",
        (Some(_), true) => "answer answer-correct",
        (Some(_), false) => "answer answer-wrong",
    };
    let verdict_class = if detail.is_correct {
        "verdict verdict-correct"
    } else {
        "verdict verdict-wrong"
    };

    rsx! {
        article { class: "result-detail",
            div { class: "result-detail-head",
                span { "Question {detail.number}" }
                span { class: "{verdict_class}", "{detail.verdict()}" }
            }
            h3 { "{detail.text}" }
            // Definition list reads well for label/value pairs.
            dl { class: "result-answers",
                dt { "Your Answer:" }
                dd { class: "{answer_class}",
                    match &detail.user_answer {
                        Some(answer) => rsx! { "{answer}" },
                        None => rsx! { "No answer provided" },
                    }
                }
                dt { "Correct Answer:" }
                dd { class: "answer answer-correct", "{detail.correct_answer}" }
            }
        }
    }
}
