use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{SessionHandle, SessionSnapshot};

use crate::context::{UiApp, build_app_context};
use crate::views::test_harness::{drive_dom, loaded_session, test_app};
use crate::views::{ViewError, use_session_snapshot};

use super::actions::{QuizActions, use_quiz_actions};

#[derive(Clone, Default)]
struct HarnessHandles {
    actions: Rc<RefCell<Option<QuizActions>>>,
    confirming: Rc<RefCell<Option<Signal<bool>>>>,
}

impl HarnessHandles {
    fn actions(&self) -> QuizActions {
        (*self.actions.borrow()).expect("actions registered")
    }

    fn confirming(&self) -> Signal<bool> {
        (*self.confirming.borrow()).expect("confirming registered")
    }
}

impl PartialEq for HarnessHandles {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<dyn UiApp>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizIntentHarness(handles: HarnessHandles) -> Element {
    let snapshot = use_session_snapshot();
    let error = use_signal(|| None::<ViewError>);
    let confirming = use_signal(|| false);
    let actions = use_quiz_actions(snapshot, error, confirming);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.actions.borrow_mut() = Some(actions);
        *handles.confirming.borrow_mut() = Some(confirming);
    }
    rsx! { div {} }
}

#[component]
fn QuizRouterHarness(props: HarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let handles = use_context::<HarnessHandles>();
    rsx! { QuizIntentHarness { handles } }
}

fn mount(session: &SessionHandle) -> (VirtualDom, HarnessHandles) {
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        QuizRouterHarness,
        HarnessProps {
            app: test_app(session.clone()),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    (dom, handles)
}

/// Drive the dom until the session publishes a snapshot matching `done`.
async fn settle(
    dom: &mut VirtualDom,
    session: &SessionHandle,
    mut done: impl FnMut(&SessionSnapshot) -> bool,
) -> SessionSnapshot {
    for _ in 0..100 {
        drive_dom(dom);
        let snapshot = session.snapshot();
        if done(&snapshot) {
            return snapshot;
        }
        tokio::task::yield_now().await;
    }
    panic!("session did not reach the expected state");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_select_records_answer_for_current_question() {
    let session = loaded_session().await;
    let (mut dom, handles) = mount(&session);
    let actions = handles.actions();

    actions.on_select.call("Pikachu".to_string());
    let snapshot = settle(&mut dom, &session, |s| s.session().answer(0).is_some()).await;
    assert_eq!(snapshot.session().answer(0), Some("Pikachu"));

    actions.on_jump.call(2);
    settle(&mut dom, &session, |s| s.session().current_index() == 2).await;
    actions.on_select.call("Sydney".to_string());
    let snapshot = settle(&mut dom, &session, |s| s.session().answer(2).is_some()).await;

    assert_eq!(snapshot.session().answer(2), Some("Sydney"));
    assert_eq!(snapshot.session().answer(1), None);
    assert!(!snapshot.is_submitted());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_confirm_submits_and_closes_dialog() {
    let session = loaded_session().await;
    let (mut dom, handles) = mount(&session);
    let actions = handles.actions();
    let mut confirming = handles.confirming();

    actions.on_select.call("Pikachu".to_string());
    settle(&mut dom, &session, |s| s.session().answer(0).is_some()).await;

    confirming.set(true);
    actions.on_cancel.call(());
    drive_dom(&mut dom);
    assert!(!*confirming.peek());
    assert!(!session.snapshot().is_submitted());

    confirming.set(true);
    actions.on_confirm.call(());
    let snapshot = settle(&mut dom, &session, |s| s.is_submitted()).await;

    assert!(!*confirming.peek());
    let results = snapshot.results().expect("results after submit");
    assert_eq!(results.score(), 1);
    assert_eq!(results.total(), 3);
}
