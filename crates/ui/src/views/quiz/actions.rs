use dioxus::prelude::*;

use quiz_core::Direction;
use services::SessionSnapshot;

use crate::context::AppContext;
use crate::views::{ViewError, run_action};

/// Session commands the quiz screen wires into its components.
#[derive(Clone, Copy)]
pub struct QuizActions {
    pub on_select: Callback<String>,
    pub on_jump: Callback<usize>,
    pub on_step: Callback<Direction>,
    pub on_cancel: Callback<()>,
    pub on_confirm: Callback<()>,
}

pub fn use_quiz_actions(
    snapshot: Signal<SessionSnapshot>,
    error: Signal<Option<ViewError>>,
    mut confirming: Signal<bool>,
) -> QuizActions {
    let ctx = use_context::<AppContext>();

    let session = ctx.session();
    let on_select = use_callback(move |answer: String| {
        let session = session.clone();
        let index = snapshot.read().session().current_index();
        run_action(error, async move { session.record_answer(index, answer).await });
    });

    let session = ctx.session();
    let on_jump = use_callback(move |index: usize| {
        let session = session.clone();
        run_action(error, async move { session.navigate_to(index).await });
    });

    let session = ctx.session();
    let on_step = use_callback(move |direction: Direction| {
        let session = session.clone();
        run_action(error, async move { session.step(direction).await });
    });

    let on_cancel = use_callback(move |()| confirming.set(false));

    let session = ctx.session();
    let on_confirm = use_callback(move |()| {
        confirming.set(false);
        let session = session.clone();
        run_action(error, async move { session.submit().await });
    });

    QuizActions {
        on_select,
        on_jump,
        on_step,
        on_cancel,
        on_confirm,
    }
}
