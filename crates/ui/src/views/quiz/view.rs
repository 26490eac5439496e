use dioxus::prelude::*;

use quiz_core::{Direction, Screen};

use super::actions::{QuizActions, use_quiz_actions};
use super::components::{QuestionCard, QuestionOverview, QuizTimer, SubmitDialog};
use crate::context::AppContext;
use crate::views::{
    ViewError, ViewState, run_action, use_screen_guard, use_session_snapshot,
};
use crate::vm::map_quiz;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_session_snapshot();
    let screen = use_screen_guard(Screen::Quiz, snapshot);

    let error = use_signal(|| None::<ViewError>);
    let mut confirming = use_signal(|| false);

    // One load request per mount; the session drops duplicates.
    let session = ctx.session();
    use_hook(move || run_action(error, async move { session.load().await }));

    let state = if screen != Screen::Quiz {
        ViewState::Idle
    } else if let Some(err) = error() {
        ViewState::Error(err)
    } else {
        ViewState::from_option(map_quiz(&snapshot.read()))
    };

    let QuizActions {
        on_select,
        on_jump,
        on_step,
        on_cancel,
        on_confirm,
    } = use_quiz_actions(snapshot, error, confirming);

    rsx! {
        div { class: "page quiz",
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading quiz questions..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(vm) => rsx! {
                    header { class: "quiz-header",
                        h1 { "Quiz Challenge" }
                        QuizTimer { timer: vm.timer.clone() }
                    }
                    div { class: "quiz-layout",
                        aside { class: "quiz-sidebar",
                            QuestionOverview { cells: vm.overview.clone(), on_jump }
                        }
                        section { class: "quiz-main",
                            QuestionCard { question: vm.question.clone(), on_select }
                            nav { class: "quiz-nav",
                                button {
                                    class: "btn",
                                    r#type: "button",
                                    disabled: !vm.can_go_back,
                                    onclick: move |_| on_step.call(Direction::Previous),
                                    "Previous"
                                }
                                span { class: "quiz-position", "{vm.position_label}" }
                                if vm.is_last {
                                    button {
                                        class: "btn btn-submit",
                                        r#type: "button",
                                        onclick: move |_| confirming.set(true),
                                        "Submit Quiz"
                                    }
                                } else {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: move |_| on_step.call(Direction::Next),
                                        "Next"
                                    }
                                }
                            }
                        }
                    }
                    if confirming() {
                        SubmitDialog {
                            answered: vm.answered,
                            total: vm.total,
                            on_cancel,
                            on_confirm,
                        }
                    }
                },
            }
        }
    }
}
