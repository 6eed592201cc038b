use std::sync::Arc;

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use quiz_core::model::{QuizType, UploadedDocument};
use services::ApiError;

use crate::context::AppContext;
use crate::vm::{SetupSubmission, can_submit};

/// A file chosen locally but not yet sent for indexing.
#[derive(Clone, Debug, PartialEq)]
struct PickedFile {
    name: String,
    bytes: Vec<u8>,
}

fn upload_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Backend(message) => message.clone(),
        _ => "Upload failed. Please try again.".to_string(),
    }
}

/// Gathers quiz type, topic, question count, and the uploaded-document
/// reference. Uploading is this form's only network side effect; the
/// "Start Quiz" action just calls back to the flow controller.
#[component]
pub fn SetupView(
    document: Signal<Option<UploadedDocument>>,
    generating: bool,
    on_setup: EventHandler<SetupSubmission>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let default_quiz_type = ctx.default_quiz_type();
    let default_count = ctx.default_question_count();
    let quiz_type = use_signal(move || default_quiz_type);
    let topic = use_signal(String::new);
    let count_input = use_signal(move || default_count.to_string());
    let picked = use_signal(|| None::<PickedFile>);
    let uploading = use_signal(|| false);
    let upload_error = use_signal(|| None::<String>);

    let on_pick = use_callback(move |()| {
        let mut picked = picked;
        spawn(async move {
            let chosen = AsyncFileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
                .await;
            if let Some(handle) = chosen {
                let bytes = handle.read().await;
                picked.set(Some(PickedFile {
                    name: handle.file_name(),
                    bytes,
                }));
            }
        });
    });

    let backend = ctx.backend();
    let on_upload = use_callback(move |()| {
        // One upload at a time; failures leave any prior reference intact.
        if uploading() {
            return;
        }
        let Some(file) = picked() else { return };
        let backend = Arc::clone(&backend);
        let mut document = document;
        let mut picked = picked;
        let mut uploading = uploading;
        let mut upload_error = upload_error;
        spawn(async move {
            uploading.set(true);
            upload_error.set(None);
            match backend.upload_pdf(&file.name, file.bytes).await {
                Ok(doc) => {
                    document.set(Some(doc));
                    picked.set(None);
                }
                Err(err) => {
                    upload_error.set(Some(upload_error_message(&err)));
                }
            }
            uploading.set(false);
        });
    });

    let on_clear = use_callback(move |()| {
        let mut document = document;
        let mut picked = picked;
        let mut upload_error = upload_error;
        document.set(None);
        picked.set(None);
        upload_error.set(None);
    });

    let parsed_count = count_input().trim().parse::<u32>().ok().filter(|n| *n > 0);
    let uploaded = document();
    let submit_enabled = can_submit(quiz_type(), parsed_count, uploaded.is_some(), generating);

    let on_submit = {
        let uploaded = uploaded.clone();
        move |_| {
            let (Some(quiz_type), Some(count), Some(doc)) =
                (quiz_type(), parsed_count, uploaded.clone())
            else {
                return;
            };
            on_setup.call(SetupSubmission {
                quiz_type,
                topic: topic(),
                count,
                doc_id: doc.id,
            });
        }
    };

    let type_buttons = QuizType::ALL.iter().map(|candidate| {
        let candidate = *candidate;
        let selected = quiz_type() == Some(candidate);
        let class = if selected {
            "type-option type-option--selected"
        } else {
            "type-option"
        };
        let mut quiz_type = quiz_type;
        rsx! {
            button {
                key: "{candidate}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| quiz_type.set(Some(candidate)),
                "{candidate.label()}"
            }
        }
    });

    let picked_name = picked().map(|file| file.name);
    let (source_class, source_label) = if let Some(name) = picked_name.as_ref() {
        ("setup-upload__name", name.clone())
    } else if let Some(doc) = uploaded.as_ref() {
        ("setup-upload__name", format!("Uploaded: {}", doc.filename))
    } else {
        (
            "setup-upload__name setup-upload__name--empty",
            "No file selected".to_string(),
        )
    };
    let status_chip = if uploaded.is_some() {
        ("setup-chip setup-chip--ready", "Ready")
    } else {
        ("setup-chip setup-chip--pending", "Not uploaded")
    };
    let upload_label = if uploading() {
        "Indexing..."
    } else if uploaded.is_some() {
        "Re-upload & replace"
    } else {
        "Upload & index"
    };
    let pick_label = if picked_name.is_some() {
        "Change file"
    } else {
        "Choose PDF"
    };
    let submit_label = if generating { "Loading" } else { "Start Quiz" };
    let mut topic = topic;
    let mut count_input = count_input;

    rsx! {
        div { class: "setup",
            h2 { class: "setup-title", "Set up your quiz" }

            div { class: "setup-field",
                span { class: "field-label", "Quiz type" }
                div { class: "type-options",
                    {type_buttons}
                }
            }

            div { class: "setup-field",
                span { class: "field-label", "PDF source" }
                div { class: "setup-upload",
                    div { class: "setup-upload__header",
                        div {
                            p { class: "setup-upload__hint", "Upload 1 PDF (max 20MB)" }
                            p { class: "setup-upload__sub",
                                "Generate unlimited quizzes from this uploaded document."
                            }
                        }
                        span { class: "{status_chip.0}", "{status_chip.1}" }
                    }

                    div { class: "setup-upload__row",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_pick.call(()),
                            "{pick_label}"
                        }
                        span { class: "{source_class}", "{source_label}" }
                    }

                    div { class: "setup-upload__row",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: picked_name.is_none() || uploading(),
                            onclick: move |_| on_upload.call(()),
                            "{upload_label}"
                        }
                        if uploaded.is_some() {
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| on_clear.call(()),
                                "Clear PDF"
                            }
                        }
                    }

                    if let Some(message) = upload_error() {
                        p { class: "setup-upload__error", "{message}" }
                    }
                }
            }

            div { class: "setup-field",
                label { class: "field-label", r#for: "quiz-topic", "Quiz topic (optional)" }
                input {
                    class: "field-input",
                    id: "quiz-topic",
                    r#type: "text",
                    placeholder: "e.g., Backpropagation basics",
                    value: "{topic()}",
                    oninput: move |evt| topic.set(evt.value()),
                }
            }

            div { class: "setup-field",
                label { class: "field-label", r#for: "num-questions", "Number of questions" }
                input {
                    class: "field-input",
                    id: "num-questions",
                    r#type: "number",
                    min: "1",
                    value: "{count_input()}",
                    oninput: move |evt| count_input.set(evt.value()),
                }
            }

            button {
                class: "btn btn-primary setup-submit",
                r#type: "button",
                disabled: !submit_enabled,
                onclick: on_submit,
                "{submit_label}"
            }
        }
    }
}
