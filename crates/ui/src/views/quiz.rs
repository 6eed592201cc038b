use dioxus::prelude::*;

use quiz_core::model::{Answer, Question};
use services::{QuizRunner, RunnerStep};

use crate::vm::option_letter;

/// Steps the user through one question at a time. Forward navigation is
/// gated on a non-blank answer; the last question's forward action hands the
/// full answer list to the completion callback.
#[component]
pub fn QuizRunnerView(questions: Vec<Question>, on_complete: EventHandler<Vec<Answer>>) -> Element {
    let runner = use_signal(|| QuizRunner::new(questions.len()));
    let set_answer = use_callback(move |value: String| {
        let mut runner = runner;
        runner.write().set_answer(value);
    });

    if questions.is_empty() {
        return rsx! {
            p { class: "quiz-empty", "No questions returned." }
        };
    }

    let index = runner.read().current_index();
    let total = questions.len();
    let current = questions[index].clone();
    let value = runner.read().current_answer().as_str().to_string();
    let can_next = runner.read().can_advance();
    let is_last = runner.read().is_last();
    let next_label = if is_last { "Finish" } else { "Next" };
    let question_number = index + 1;

    let on_next = move |_| {
        let step = {
            let mut runner = runner;
            runner.write().next()
        };
        if let RunnerStep::Finished(answers) = step {
            on_complete.call(answers);
        }
    };

    let on_prev = move |_| {
        let mut runner = runner;
        runner.write().prev();
    };

    rsx! {
        div { class: "quiz",
            p { class: "quiz-progress", "Question {question_number} of {total}" }
            h3 { class: "quiz-prompt", "{current.prompt()}" }

            match &current {
                Question::MultipleChoice(q) => rsx! {
                    McqInput { options: q.options().to_vec(), value, on_change: set_answer }
                },
                Question::TrueFalse(_) => rsx! {
                    TrueFalseInput { value, on_change: set_answer }
                },
                Question::OpenEnded(_) => rsx! {
                    OpenEndedInput { value, on_change: set_answer }
                },
            }

            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: index == 0,
                    onclick: on_prev,
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_next,
                    onclick: on_next,
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn McqInput(options: Vec<String>, value: String, on_change: EventHandler<String>) -> Element {
    let buttons = options.iter().enumerate().map(|(index, option)| {
        let selected = value == index.to_string();
        let class = if selected {
            "quiz-option quiz-option--selected"
        } else {
            "quiz-option"
        };
        let letter = option_letter(index);
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_change.call(index.to_string()),
                "{letter}. {option}"
            }
        }
    });

    rsx! {
        div { class: "quiz-options",
            {buttons}
        }
    }
}

#[component]
fn TrueFalseInput(value: String, on_change: EventHandler<String>) -> Element {
    let true_class = if value == "true" {
        "quiz-option quiz-option--half quiz-option--selected"
    } else {
        "quiz-option quiz-option--half"
    };
    let false_class = if value == "false" {
        "quiz-option quiz-option--half quiz-option--selected"
    } else {
        "quiz-option quiz-option--half"
    };

    rsx! {
        div { class: "quiz-truefalse",
            button {
                class: "{true_class}",
                r#type: "button",
                onclick: move |_| on_change.call("true".to_string()),
                "True"
            }
            button {
                class: "{false_class}",
                r#type: "button",
                onclick: move |_| on_change.call("false".to_string()),
                "False"
            }
        }
    }
}

#[component]
fn OpenEndedInput(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "quiz-open",
            textarea {
                class: "quiz-open__input",
                rows: "6",
                placeholder: "Type your answer...",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
            p { class: "quiz-open__tip", "Tip: short answers are fine." }
        }
    }
}
