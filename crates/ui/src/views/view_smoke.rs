use quiz_core::model::{
    Answer, MultipleChoiceQuestion, OpenEndedQuestion, Question, QuizType, TrueFalseQuestion,
};

use super::test_harness::{FakeBackend, ViewKind, setup_view_harness};

fn mcq(prompt: &str, answer_index: usize) -> Question {
    Question::MultipleChoice(
        MultipleChoiceQuestion::new(
            prompt,
            vec![
                "alpha".into(),
                "beta".into(),
                "gamma".into(),
                "delta".into(),
            ],
            answer_index,
        )
        .unwrap(),
    )
}

#[tokio::test(flavor = "current_thread")]
async fn flow_starts_on_the_setup_stage() {
    let mut harness = setup_view_harness(ViewKind::Flow, FakeBackend::with_questions(Vec::new()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Set up your quiz"), "missing title in {html}");
    assert!(html.contains("Start Quiz"), "missing submit in {html}");
    assert!(html.contains("Not uploaded"), "missing chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn setup_submit_is_disabled_without_a_document() {
    let mut harness = setup_view_harness(ViewKind::Setup, FakeBackend::with_questions(Vec::new()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No file selected"), "missing empty state in {html}");
    assert!(html.contains("Upload 1 PDF"), "missing upload hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn runner_renders_first_question_with_progress() {
    let questions = vec![mcq("Which layer learns?", 1), mcq("Pick again", 0)];
    let mut harness = setup_view_harness(
        ViewKind::Runner(questions),
        FakeBackend::with_questions(Vec::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Which layer learns?"), "missing prompt in {html}");
    assert!(html.contains("A. alpha"), "missing lettered option in {html}");
    assert!(html.contains("Previous"), "missing nav in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn runner_with_no_questions_shows_notice() {
    let mut harness = setup_view_harness(
        ViewKind::Runner(Vec::new()),
        FakeBackend::with_questions(Vec::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No questions returned."), "missing notice in {html}");
    assert!(!html.contains("Question 1"), "unexpected question ui in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn true_false_runner_renders_both_choices() {
    let questions = vec![Question::TrueFalse(
        TrueFalseQuestion::new("The sky is green", false).unwrap(),
    )];
    let mut harness = setup_view_harness(
        ViewKind::Runner(questions),
        FakeBackend::with_questions(Vec::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("True"), "missing true button in {html}");
    assert!(html.contains("False"), "missing false button in {html}");
    assert!(html.contains("Finish"), "single question should finish in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_render_marks_and_tally() {
    let questions = vec![mcq("Pick one", 1), mcq("Pick another", 2)];
    let answers = vec![Answer::new("1"), Answer::new("0")];
    let mut harness = setup_view_harness(
        ViewKind::Results {
            quiz_type: QuizType::MultipleChoice,
            questions,
            answers,
            score: 1,
        },
        FakeBackend::with_questions(Vec::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(html.contains("1 / 2"), "missing tally in {html}");
    assert!(html.contains("Your Answer:"), "missing user answer in {html}");
    assert!(html.contains("B. beta"), "missing lettered answer in {html}");
    assert!(html.contains("Completed in 1:30"), "missing duration in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_ended_results_suppress_the_tally() {
    let questions = vec![Question::OpenEnded(
        OpenEndedQuestion::new("Capital of France?", "Paris").unwrap(),
    )];
    let answers = vec![Answer::new("paris")];
    let mut harness = setup_view_harness(
        ViewKind::Results {
            quiz_type: QuizType::OpenEnded,
            questions,
            answers,
            score: 1,
        },
        FakeBackend::with_questions(Vec::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(
        !html.contains("Correct Answers"),
        "tally should be suppressed in {html}"
    );
    assert!(
        html.contains("Correct Answer:"),
        "per-question answer should stay in {html}"
    );
    assert!(html.contains("paris"), "missing user answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_answers_display_no_answer() {
    let questions = vec![mcq("Pick one", 1)];
    let answers = vec![Answer::empty()];
    let mut harness = setup_view_harness(
        ViewKind::Results {
            quiz_type: QuizType::MultipleChoice,
            questions,
            answers,
            score: 0,
        },
        FakeBackend::with_questions(Vec::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("(no answer)"), "missing placeholder in {html}");
    assert!(html.contains("0 / 1"), "missing tally in {html}");
}
