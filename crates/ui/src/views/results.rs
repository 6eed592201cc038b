use dioxus::prelude::*;

use quiz_core::model::{Answer, Question, QuizType};

use crate::vm::map_result_rows;

/// Per-question breakdown plus the aggregate tally.
///
/// Open-ended sessions suppress the tally headline and the per-question
/// marks: loose matching is not trustworthy enough to show as a hard number.
/// The correctness logic still runs, through the same predicate the scorer
/// uses.
#[component]
pub fn ResultsView(
    quiz_type: QuizType,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    score: u32,
    duration: Option<String>,
    on_restart: EventHandler<()>,
) -> Element {
    let rows = map_result_rows(&questions, &answers);
    let show_marks = quiz_type != QuizType::OpenEnded;
    let total = questions.len();

    let cards = rows.iter().enumerate().map(|(index, row)| {
        let card_class = if !show_marks {
            "result-card"
        } else if row.is_correct {
            "result-card result-card--correct"
        } else {
            "result-card result-card--incorrect"
        };
        let mark = show_marks.then(|| {
            if row.is_correct {
                ("result-mark result-mark--correct", "✓")
            } else {
                ("result-mark result-mark--incorrect", "✗")
            }
        });
        rsx! {
            div { key: "{index}", class: "{card_class}",
                div { class: "result-card__header",
                    p { class: "result-card__prompt", "{row.prompt}" }
                    if let Some((mark_class, glyph)) = mark {
                        span { class: "{mark_class}", "{glyph}" }
                    }
                }
                div { class: "result-card__answers",
                    p {
                        strong { "Your Answer: " }
                        "{row.your_answer}"
                    }
                    p {
                        strong { "Correct Answer: " }
                        "{row.correct_answer}"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "results",
            h2 { class: "results-title", "Quiz Results" }

            if show_marks {
                div { class: "results-score",
                    p { class: "results-score__value", "{score} / {total}" }
                    p { class: "results-score__caption", "Correct Answers" }
                }
            }

            if let Some(duration) = duration.as_ref() {
                p { class: "results-duration", "Completed in {duration}" }
            }

            div { class: "results-list",
                {cards}
            }

            button {
                class: "btn btn-primary results-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Generate Another Quiz"
            }
        }
    }
}
