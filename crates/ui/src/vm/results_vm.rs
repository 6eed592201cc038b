use quiz_core::model::{Answer, Question};
use quiz_core::score::is_correct;

/// One question as the results view shows it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRowVm {
    pub prompt: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Letter prefix for a multiple-choice option ("A", "B", ...).
///
/// Callers only pass indices that name an existing option.
#[must_use]
pub fn option_letter(index: usize) -> char {
    char::from(b'A' + index as u8)
}

/// The user's answer in human-readable form; blank becomes "(no answer)".
/// A chosen index that no longer names an option falls back to the raw
/// answer string.
#[must_use]
pub fn display_user_answer(question: &Question, answer: &Answer) -> String {
    if answer.is_blank() {
        return "(no answer)".to_string();
    }
    match question {
        Question::MultipleChoice(q) => {
            let chosen = answer
                .choice_index()
                .and_then(|index| q.options().get(index).map(|option| (index, option)));
            match chosen {
                Some((index, option)) => format!("{}. {option}", option_letter(index)),
                None => answer.as_str().to_string(),
            }
        }
        Question::TrueFalse(_) => {
            if answer.is_true() {
                "True".to_string()
            } else {
                "False".to_string()
            }
        }
        Question::OpenEnded(_) => answer.as_str().to_string(),
    }
}

/// The canonical correct answer in the same human-readable form.
#[must_use]
pub fn display_correct_answer(question: &Question) -> String {
    match question {
        Question::MultipleChoice(q) => format!(
            "{}. {}",
            option_letter(q.answer_index()),
            q.correct_option()
        ),
        Question::TrueFalse(q) => {
            if q.answer() {
                "True".to_string()
            } else {
                "False".to_string()
            }
        }
        Question::OpenEnded(q) => q.answer().to_string(),
    }
}

/// Map a finished session onto display rows. Correctness comes from the same
/// predicate the scorer uses, so marks and tally cannot disagree.
#[must_use]
pub fn map_result_rows(questions: &[Question], answers: &[Answer]) -> Vec<ResultRowVm> {
    let blank = Answer::empty();
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = answers.get(index).unwrap_or(&blank);
            ResultRowVm {
                prompt: question.prompt().to_string(),
                your_answer: display_user_answer(question, answer),
                correct_answer: display_correct_answer(question),
                is_correct: is_correct(question, answer),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{
        MultipleChoiceQuestion, OpenEndedQuestion, Question, TrueFalseQuestion,
    };
    use quiz_core::score::score_quiz;

    fn mcq() -> Question {
        Question::MultipleChoice(
            MultipleChoiceQuestion::new(
                "Pick one",
                vec!["alpha".into(), "beta".into(), "gamma".into(), "delta".into()],
                1,
            )
            .unwrap(),
        )
    }

    #[test]
    fn mcq_answers_are_letter_prefixed() {
        let q = mcq();
        assert_eq!(display_user_answer(&q, &Answer::new("1")), "B. beta");
        assert_eq!(display_correct_answer(&q), "B. beta");
    }

    #[test]
    fn out_of_range_choice_falls_back_to_raw() {
        let q = mcq();
        assert_eq!(display_user_answer(&q, &Answer::new("9")), "9");
    }

    #[test]
    fn blank_answer_reads_no_answer() {
        let q = Question::OpenEnded(OpenEndedQuestion::new("Capital?", "Paris").unwrap());
        assert_eq!(display_user_answer(&q, &Answer::empty()), "(no answer)");
    }

    #[test]
    fn true_false_displays_capitalized() {
        let q = Question::TrueFalse(TrueFalseQuestion::new("Sky is blue", true).unwrap());
        assert_eq!(display_user_answer(&q, &Answer::new("TRUE")), "True");
        assert_eq!(display_correct_answer(&q), "True");
    }

    #[test]
    fn row_marks_agree_with_the_scorer() {
        let questions = vec![
            mcq(),
            Question::TrueFalse(TrueFalseQuestion::new("Sky is blue", true).unwrap()),
            Question::OpenEnded(OpenEndedQuestion::new("Capital?", "Paris").unwrap()),
        ];
        let answers = vec![Answer::new("1"), Answer::new("false"), Answer::new("paris")];

        let rows = map_result_rows(&questions, &answers);
        let marked = rows.iter().filter(|row| row.is_correct).count() as u32;
        assert_eq!(marked, score_quiz(&questions, &answers));
        assert!(rows[0].is_correct);
        assert!(!rows[1].is_correct);
        assert!(rows[2].is_correct);
    }
}
