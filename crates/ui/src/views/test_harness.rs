use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Difficulty, Question, UserIdentity};
use services::{QuestionSource, QuizConfig, SessionHandle, StaticQuestionSource, spawn_session};

use crate::context::{UiApp, build_app_context};
use crate::views::{EntryView, QuizView, ResultsView};

pub const EMAIL: &str = "ada@example.com";

#[derive(Clone)]
struct TestApp {
    session: SessionHandle,
}

impl UiApp for TestApp {
    fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    fn question_count(&self) -> u8 {
        15
    }

    fn time_limit_secs(&self) -> u32 {
        30 * 60
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Entry,
    Quiz,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Entry => rsx! { EntryView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session: SessionHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Entertainment: Video Games",
            Difficulty::Easy,
            "Which Pok&eacute;mon is the mascot?",
            "Pikachu",
            vec!["Eevee".into(), "Mew".into(), "Snorlax".into()],
        ),
        Question::new(
            "Science: Computers",
            Difficulty::Medium,
            "How many bits are in a byte?",
            "8",
            vec!["4".into(), "16".into(), "32".into()],
        ),
        Question::new(
            "Geography",
            Difficulty::Hard,
            "What is the capital of Australia?",
            "Canberra",
            vec!["Sydney".into(), "Melbourne".into(), "Perth".into()],
        ),
    ]
}

/// Session that has an identity but no questions yet.
pub async fn begun_session(source: Arc<dyn QuestionSource>) -> SessionHandle {
    let session = spawn_session(source, &QuizConfig::default());
    session
        .begin(UserIdentity::new(EMAIL).expect("valid email"))
        .await
        .expect("begin");
    session
}

/// Session with the sample questions loaded and the countdown running.
pub async fn loaded_session() -> SessionHandle {
    let session = begun_session(Arc::new(StaticQuestionSource::new(sample_questions()))).await;
    session.load().await.expect("load");
    session
        .wait_for(|snapshot| snapshot.is_loaded())
        .await
        .expect("questions loaded");
    session
}

pub fn test_app(session: SessionHandle) -> Arc<dyn UiApp> {
    Arc::new(TestApp { session })
}

pub fn setup_view_harness(view: ViewKind, session: SessionHandle) -> ViewHarness {
    let app = Arc::new(TestApp {
        session: session.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, session }
}
