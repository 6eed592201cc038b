use std::sync::Arc;

use dioxus::prelude::*;

use quiz_core::model::{Answer, UploadedDocument};
use services::{QuizSession, RestartPolicy, Stage};

use crate::context::AppContext;
use crate::views::{QuizRunnerView, ResultsView, SetupView};
use crate::vm::{SetupSubmission, format_duration};

/// Backend failures are flattened to one opaque message at this boundary.
const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// The flow controller: owns the session object and the three-stage
/// lifecycle. Child views never write session state; they call back here.
#[component]
pub fn QuizFlowView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(QuizSession::new);
    let document = use_signal(|| None::<UploadedDocument>);
    let generating = use_signal(|| false);

    let backend = ctx.backend();
    let clock = ctx.clock();
    let on_setup = use_callback(move |submission: SetupSubmission| {
        // One generation request at a time; no cancellation.
        if generating() {
            return;
        }
        let backend = Arc::clone(&backend);
        let mut session = session;
        let mut generating = generating;
        spawn(async move {
            generating.set(true);
            {
                let mut session = session.write();
                let _ = session.begin(submission.quiz_type, submission.topic.clone(), clock.now());
            }

            let result = backend
                .generate(
                    submission.quiz_type,
                    &submission.topic,
                    submission.count,
                    &submission.doc_id,
                )
                .await;

            {
                let mut session = session.write();
                let _ = match result {
                    Ok(questions) => session.questions_loaded(questions),
                    Err(_) => session.generation_failed(GENERIC_ERROR),
                };
            }
            generating.set(false);
        });
    });

    let on_complete = use_callback(move |answers: Vec<Answer>| {
        let mut session = session;
        let _ = session.write().complete(answers, clock.now());
    });

    let restart_policy = ctx.restart_policy();
    let on_restart = use_callback(move |()| {
        let mut session = session;
        session.write().restart();
        if restart_policy == RestartPolicy::ClearDocument {
            let mut document = document;
            document.set(None);
        }
    });

    let snapshot = session.read().clone();
    let pane = if generating() {
        QuizPane::Loading
    } else if let Some(message) = snapshot.error() {
        QuizPane::Error(message.to_string())
    } else {
        QuizPane::Runner
    };

    rsx! {
        match snapshot.stage() {
            Stage::Setup => rsx! {
                SetupView { document, generating: generating(), on_setup }
            },
            Stage::Quiz => rsx! {
                match pane {
                    QuizPane::Loading => rsx! {
                        div { class: "flow-loading",
                            p { class: "flow-loading__note", "Generating questions…" }
                        }
                    },
                    QuizPane::Error(message) => rsx! {
                        div { class: "flow-error",
                            p { class: "flow-error__message", "{message}" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| on_restart.call(()),
                                "Try again"
                            }
                        }
                    },
                    QuizPane::Runner => rsx! {
                        QuizRunnerView {
                            questions: snapshot.questions().to_vec(),
                            on_complete,
                        }
                    },
                }
            },
            Stage::Results => rsx! {
                ResultsView {
                    quiz_type: snapshot.quiz_type(),
                    questions: snapshot.questions().to_vec(),
                    answers: snapshot.answers().to_vec(),
                    score: snapshot.score(),
                    duration: snapshot.duration().map(format_duration),
                    on_restart,
                }
            },
        }
    }
}

/// What the quiz stage shows while no runner is on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
enum QuizPane {
    Loading,
    Error(String),
    Runner,
}
