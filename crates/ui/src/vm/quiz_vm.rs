use mentor_core::model::{OptionMark, QuizAttempt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    /// Numbered prompt, e.g. "1. Qu'est-ce que Rust ?".
    pub label: String,
    pub options: Vec<QuizOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub percentage_label: String,
    pub message: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub questions: Vec<QuizQuestionVm>,
    pub submit_enabled: bool,
    pub submitted: bool,
    pub result: Option<QuizResultVm>,
}

#[must_use]
pub fn map_quiz(attempt: &QuizAttempt) -> QuizVm {
    let questions = attempt
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let prompt = if question.question.is_empty() {
                "Question non disponible"
            } else {
                question.question.as_str()
            };
            let options = question
                .options
                .iter()
                .map(|option| QuizOptionVm {
                    text: option.clone(),
                    selected: attempt.is_selected(index, option),
                    mark: attempt.mark(index, option),
                })
                .collect();
            QuizQuestionVm {
                label: format!("{}. {prompt}", index + 1),
                options,
            }
        })
        .collect();

    let result = attempt.report().map(|report| QuizResultVm {
        score_label: format!("{}/{}", report.score, report.total),
        percentage_label: format!("{}%", report.percentage),
        message: report.band.message(),
        color: report.band.color(),
    });

    QuizVm {
        questions,
        submit_enabled: attempt.all_answered() && !attempt.submitted(),
        submitted: attempt.submitted(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::model::Question;

    fn one_question_attempt() -> QuizAttempt {
        QuizAttempt::new(vec![Question {
            question: "Q1".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer: "b".into(),
        }])
    }

    #[test]
    fn submit_disabled_until_every_question_answered() {
        let mut attempt = one_question_attempt();
        let vm = map_quiz(&attempt);
        assert!(!vm.submit_enabled);
        assert!(!vm.submitted);
        assert!(vm.result.is_none());

        attempt.select_answer(0, "b");
        let vm = map_quiz(&attempt);
        assert!(vm.submit_enabled);
        assert!(vm.questions[0].options[1].selected);
        assert_eq!(vm.questions[0].options[1].mark, OptionMark::Plain);
    }

    #[test]
    fn submitted_attempt_maps_result_and_marks() {
        let mut attempt = one_question_attempt();
        attempt.select_answer(0, "b");
        attempt.submit().unwrap();

        let vm = map_quiz(&attempt);
        assert!(vm.submitted);
        assert!(!vm.submit_enabled);
        let result = vm.result.unwrap();
        assert_eq!(result.score_label, "1/1");
        assert_eq!(result.percentage_label, "100%");
        assert_eq!(result.message, "Excellent ! 🎉");
        assert_eq!(result.color, "#52c41a");
        assert_eq!(vm.questions[0].options[1].mark, OptionMark::Correct);
    }

    #[test]
    fn wrong_selection_marks_both_options() {
        let mut attempt = one_question_attempt();
        attempt.select_answer(0, "c");
        attempt.submit().unwrap();

        let vm = map_quiz(&attempt);
        let options = &vm.questions[0].options;
        assert_eq!(options[1].mark, OptionMark::Correct);
        assert_eq!(options[2].mark, OptionMark::Incorrect);
        assert_eq!(options[0].mark, OptionMark::Plain);
    }

    #[test]
    fn empty_prompt_gets_a_fallback_label() {
        let attempt = QuizAttempt::new(vec![Question {
            question: String::new(),
            options: vec!["a".into()],
            answer: "a".into(),
        }]);
        let vm = map_quiz(&attempt);
        assert_eq!(vm.questions[0].label, "1. Question non disponible");
    }
}
