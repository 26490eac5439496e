use dioxus::prelude::*;

use crate::vm::{OverviewCellVm, QuestionVm, TimerVm};

#[component]
pub fn QuizTimer(timer: TimerVm) -> Element {
    rsx! {
        div { class: "timer-box",
            span { class: "{timer.urgency_class}", "{timer.label}" }
        }
    }
}

#[component]
pub fn QuestionCard(question: QuestionVm, on_select: Callback<String>) -> Element {
    rsx! {
        div { class: "question-card",
            div { class: "question-meta",
                span { class: "question-category", "Category: {question.category}" }
                span { class: "{question.difficulty_class}", "{question.difficulty_label}" }
            }
            h2 { class: "question-text", "{question.text}" }
            div { class: "choices",
                for choice in question.choices {
                    button {
                        key: "{choice.letter}",
                        class: if choice.selected { "choice choice-selected" } else { "choice" },
                        r#type: "button",
                        onclick: {
                            let value = choice.value.clone();
                            move |_| on_select.call(value.clone())
                        },
                        span { class: "choice-letter", "{choice.letter}." }
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn QuestionOverview(cells: Vec<OverviewCellVm>, on_jump: Callback<usize>) -> Element {
    rsx! {
        div { class: "overview",
            h3 { "Question Overview" }
            div { class: "overview-grid",
                for cell in cells {
                    button {
                        key: "{cell.index}",
                        class: "{cell.class}",
                        r#type: "button",
                        title: "{cell.status.label()}",
                        onclick: move |_| on_jump.call(cell.index),
                        "{cell.number}"
                    }
                }
            }
            ul { class: "overview-legend",
                li { span { class: "legend-swatch status-current" } "Current" }
                li { span { class: "legend-swatch status-answered" } "Answered" }
                li { span { class: "legend-swatch status-visited" } "Visited" }
                li { span { class: "legend-swatch status-not-visited" } "Not Visited" }
            }
        }
    }
}

#[component]
pub fn SubmitDialog(
    answered: usize,
    total: usize,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Submit quiz?" }
                p { class: "modal-body",
                    "You answered {answered} of {total} questions. Answers cannot be changed after submitting."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Keep Going"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Submit"
                    }
                }
            }
        }
    }
}
