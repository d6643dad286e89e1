use std::time::Duration;

use serde_json::json;
use services::{StatusCode, StubReply};
use tutor_core::model::{Difficulty, Feedback, Question, QuestionId, QuestionOption, Topic};
use tutor_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_delay};

const LONG_TOAST: Duration = Duration::from_secs(60);

fn algebra_question() -> StubReply {
    StubReply::Json(json!({
        "id": 1,
        "question_text": "2+2=?",
        "options": [{ "text": "3" }, { "text": "4" }]
    }))
}

fn correct_feedback() -> StubReply {
    StubReply::Json(json!({
        "is_correct": true,
        "explanation": "Two plus two is four.",
        "solution_steps": ["Add 2 and 2", "The sum is 4"],
        "performance_stats": {
            "total_attempts": 4,
            "correct_attempts": 3,
            "success_rate": 75.0
        }
    }))
}

#[tokio::test(flavor = "current_thread")]
async fn tutor_view_smoke_renders_empty_form() {
    let harness = setup_view_harness(
        ViewKind::Tutor,
        algebra_question(),
        correct_feedback(),
        LONG_TOAST,
    );
    let html = harness.render();
    assert!(html.contains("Math Tutor"), "missing title in {html}");
    assert!(html.contains("Select topic"), "missing topic placeholder in {html}");
    assert!(html.contains("Generate Question"), "missing button in {html}");
    assert!(!html.contains("Submit Answer"), "no question yet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tutor_view_smoke_answers_algebra_question() {
    let mut harness = setup_view_harness(
        ViewKind::Tutor,
        algebra_question(),
        correct_feedback(),
        LONG_TOAST,
    );
    harness.update_quiz(|state| {
        state.select_topic(Topic::Algebra);
        state.select_difficulty(Difficulty::Beginner);
    });

    harness.click_generate();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("2+2=?"), "missing question in {html}");
    assert!(html.contains("option-1"), "missing option ids in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");

    assert!(harness.update_quiz(|state| state.select_answer("4")));
    harness.click_submit();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Correct! 🎉"), "missing verdict in {html}");
    assert!(html.contains("Solution Steps:"), "missing steps heading in {html}");
    assert!(html.contains("The sum is 4"), "missing step in {html}");
    assert!(
        html.contains("3 of 4 attempts correct (75%)"),
        "missing stats in {html}"
    );
    assert!(html.contains("Next Question"), "missing next in {html}");
    assert!(!html.contains("Submit Answer"), "submit should hide in {html}");

    let submission = harness.api.last_submission().expect("submitted");
    assert_eq!(submission.selected_answer, "4");
    assert_eq!(harness.snapshot().history().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn tutor_view_smoke_submit_failure_shows_retry_toast() {
    let mut harness = setup_view_harness(
        ViewKind::Tutor,
        algebra_question(),
        StubReply::Status(StatusCode::INTERNAL_SERVER_ERROR),
        LONG_TOAST,
    );
    harness.update_quiz(|state| {
        state.select_topic(Topic::Algebra);
        state.select_difficulty(Difficulty::Beginner);
    });
    harness.click_generate();
    harness.drive_async().await;
    harness.update_quiz(|state| state.select_answer("3"));

    harness.click_submit();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to submit answer. Please try again."),
        "missing toast in {html}"
    );
    assert!(html.contains("toast--destructive"), "toast not destructive in {html}");
    assert!(!html.contains("Next Question"), "no feedback expected in {html}");

    let state = harness.snapshot();
    assert!(!state.is_loading());
    assert_eq!(state.selected_answer(), Some("3"));
}

#[tokio::test(flavor = "current_thread")]
async fn tutor_view_smoke_validates_before_calling_backend() {
    let mut harness = setup_view_harness(
        ViewKind::Tutor,
        algebra_question(),
        correct_feedback(),
        LONG_TOAST,
    );
    harness.click_generate();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Please select both topic and difficulty"),
        "missing selection notice in {html}"
    );
    assert_eq!(harness.api.question_calls(), 0);

    harness.click_submit();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Please select an answer"),
        "missing answer notice in {html}"
    );
    assert_eq!(harness.api.submit_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn toasts_expire_on_their_own_deadlines() {
    const SELECTION_NOTICE: &str = "Please select both topic and difficulty";
    const ANSWER_NOTICE: &str = "Please select an answer";

    let mut harness = setup_view_harness(
        ViewKind::Tutor,
        algebra_question(),
        correct_feedback(),
        Duration::from_millis(600),
    );
    harness.click_generate();
    harness.drive_async().await;
    assert!(harness.render().contains(SELECTION_NOTICE));

    tokio::time::sleep(Duration::from_millis(300)).await;
    harness.click_submit();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(SELECTION_NOTICE), "first toast gone early in {html}");
    assert!(html.contains(ANSWER_NOTICE), "missing second toast in {html}");

    // Past the first deadline, well before the second.
    tokio::time::sleep(Duration::from_millis(350)).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains(SELECTION_NOTICE), "first toast should expire in {html}");
    assert!(html.contains(ANSWER_NOTICE), "second toast removed early in {html}");

    tokio::time::sleep(Duration::from_millis(400)).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("toast-title"), "all toasts should expire in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_tutor_view_during_reveal_delay_releases_loading() {
    let mut harness = setup_view_harness_with_delay(
        ViewKind::Tutor,
        algebra_question(),
        correct_feedback(),
        LONG_TOAST,
        Duration::from_millis(300),
    );
    harness.update_quiz(|state| {
        state.select_topic(Topic::Algebra);
        state.select_difficulty(Difficulty::Beginner);
    });
    harness.click_generate();
    harness.drive_async().await;
    harness.drive_async().await;
    harness.update_quiz(|state| state.select_answer("4"));

    harness.click_submit();
    harness.drive_async().await;
    assert!(harness.snapshot().is_loading());
    assert_eq!(harness.api.submit_calls(), 1);

    harness.show(ViewKind::Progress);
    assert!(!harness.snapshot().is_loading());

    tokio::time::sleep(Duration::from_millis(400)).await;
    harness.drive_async().await;
    harness.show(ViewKind::Tutor);

    let state = harness.snapshot();
    assert!(state.feedback().is_none());
    assert!(state.history().is_empty());
    let html = harness.render();
    assert!(html.contains("Generate Question"), "loading stuck in {html}");
    assert!(html.contains("Submit Answer"), "submit should be usable in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_lists_attempts() {
    let mut harness = setup_view_harness(
        ViewKind::Progress,
        algebra_question(),
        correct_feedback(),
        LONG_TOAST,
    );
    assert!(harness.render().contains("No questions answered yet."));

    harness.update_quiz(|state| {
        state.select_topic(Topic::Geometry);
        state.select_difficulty(Difficulty::Advanced);
    });
    let request = harness
        .update_quiz(|state| state.begin_question_request())
        .expect("selection complete");
    harness.update_quiz(|state| {
        state.apply_question(
            request,
            Question::new(
                QuestionId::from(1),
                "Angles in a triangle?",
                vec![QuestionOption::new("180")],
            ),
        );
        state.select_answer("180");
    });
    harness
        .update_quiz(|state| state.begin_submission())
        .expect("answer selected");
    harness.update_quiz(|state| {
        state.reveal_feedback(
            Feedback::new(true, "", vec![]),
            fixed_now(),
        );
    });

    let html = harness.render();
    assert!(html.contains("1 of 1 correct"), "missing tally in {html}");
    assert!(html.contains("Angles in a triangle?"), "missing row in {html}");
    assert!(html.contains("Geometry · Advanced"), "missing scope in {html}");
    assert!(html.contains("Answered 180: Correct"), "missing result in {html}");
}
