use std::sync::Arc;
use std::time::Duration;

use services::{QuizConfig, StaticQuestionSource, spawn_session};

use super::test_harness::{
    EMAIL, ViewKind, begun_session, loaded_session, sample_questions, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn entry_view_smoke_renders_form() {
    let session = spawn_session(
        Arc::new(StaticQuestionSource::new(sample_questions())),
        &QuizConfig::default(),
    );
    let mut harness = setup_view_harness(ViewKind::Entry, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Quiz Challenge"), "missing title in {html}");
    assert!(
        html.contains("15 questions in 30 minutes"),
        "missing subtitle in {html}"
    );
    assert!(html.contains("Email Address"), "missing label in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn entry_view_smoke_renders_load_failure_notice() {
    let session = begun_session(Arc::new(StaticQuestionSource::failing(1))).await;
    session.load().await.expect("load");
    session
        .wait_for(|snapshot| snapshot.notice().is_some())
        .await
        .expect("notice");

    let mut harness = setup_view_harness(ViewKind::Entry, session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Failed to load quiz questions. Please try again."),
        "missing notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loading_state() {
    let source = StaticQuestionSource::new(sample_questions()).with_delay(Duration::from_secs(60));
    let session = begun_session(Arc::new(source)).await;

    let mut harness = setup_view_harness(ViewKind::Quiz, session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Loading quiz questions..."),
        "missing loading text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_current_question() {
    let session = loaded_session().await;

    let mut harness = setup_view_harness(ViewKind::Quiz, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Category: Video Games"), "missing category in {html}");
    assert!(html.contains("EASY"), "missing difficulty in {html}");
    assert!(html.contains("Which Pokémon is the mascot?"), "missing text in {html}");
    assert!(html.contains("Pikachu"), "missing choice in {html}");
    for letter in ["A.", "B.", "C.", "D."] {
        assert!(html.contains(letter), "missing {letter} in {html}");
    }
    assert!(html.contains("1 of 3"), "missing position in {html}");
    assert!(html.contains("30:00"), "missing timer in {html}");
    assert!(html.contains("Not Visited"), "missing legend in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(!html.contains("Submit Quiz"), "unexpected submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_offers_submit_on_last_question() {
    let session = loaded_session().await;
    session.navigate_to(2).await.expect("navigate");

    let mut harness = setup_view_harness(ViewKind::Quiz, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("3 of 3"), "missing position in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
    assert!(html.contains("Canberra"), "missing choice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_details() {
    let session = loaded_session().await;
    session.record_answer(0, "Pikachu").await.expect("answer");
    session.record_answer(1, "16").await.expect("answer");
    session.submit().await.expect("submit");

    let mut harness = setup_view_harness(ViewKind::Results, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(html.contains("1/3"), "missing score in {html}");
    assert!(html.contains("33% Correct"), "missing percentage in {html}");
    assert!(html.contains("score-poor"), "missing band class in {html}");
    assert!(html.contains(EMAIL), "missing email in {html}");
    assert!(html.contains("No answer provided"), "missing empty answer in {html}");
    assert!(html.contains("Take Another Quiz"), "missing reset button in {html}");
}
