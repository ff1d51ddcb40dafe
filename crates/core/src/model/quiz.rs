use serde::Deserialize;

//
// ─── QUIZ TYPES ────────────────────────────────────────────────────────────────
//

/// One multiple-choice question as delivered by the server.
///
/// Correctness is exact string equality between a selected option and
/// `answer`; the server is expected to repeat one of `options` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
}

/// Annotation shown on an option once the attempt is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// No annotation.
    Plain,
    /// The question's correct option (✓).
    Correct,
    /// An option the user chose that is not the answer (✗).
    Incorrect,
}

/// Feedback band selected from the rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NotBad,
    KeepPracticing,
}

impl ScoreBand {
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Good
        } else if percentage >= 40 {
            Self::NotBad
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent ! 🎉",
            Self::Good => "Bon travail ! 👍",
            Self::NotBad => "Pas mal ! 💪",
            Self::KeepPracticing => "Continue à t'entraîner ! 📚",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#52c41a",
            Self::Good => "#faad14",
            Self::NotBad => "#fa8c16",
            Self::KeepPracticing => "#ff4d4f",
        }
    }
}

/// Grading result computed when an attempt is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: ScoreBand,
}

//
// ─── QUIZ ATTEMPT STATE MACHINE ────────────────────────────────────────────────
//

/// One run through a generated quiz: `rendered → (answering)* → submitted`.
///
/// Answer slots parallel the question list. Submission is terminal: once
/// submitted, selections and further submit calls are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    questions: Vec<Question>,
    answers: Vec<Option<String>>,
    submitted: bool,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            submitted: false,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index)?.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize, option: &str) -> bool {
        self.answer(index) == Some(option)
    }

    #[must_use]
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Record the chosen option for one question.
    ///
    /// Returns `false` (and leaves the slot untouched) after submission or
    /// for an out-of-range index.
    pub fn select_answer(&mut self, index: usize, option: &str) -> bool {
        if self.submitted {
            return false;
        }
        match self.answers.get_mut(index) {
            Some(slot) => {
                *slot = Some(option.to_string());
                true
            }
            None => false,
        }
    }

    /// Submit eligibility: every slot holds a selection.
    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Freeze the attempt and grade it.
    ///
    /// Returns `None` when slots are still empty or the attempt was already
    /// submitted; re-submitting is a no-op.
    pub fn submit(&mut self) -> Option<QuizReport> {
        if self.submitted || !self.all_answered() {
            return None;
        }
        self.submitted = true;
        self.report()
    }

    /// The grading report, available once submitted.
    #[must_use]
    pub fn report(&self) -> Option<QuizReport> {
        if !self.submitted {
            return None;
        }
        let total = self.questions.len();
        let score = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| answer.as_deref() == Some(question.answer.as_str()))
            .count();
        // A quiz without questions grades as 0% rather than dividing by zero.
        let percentage = if total == 0 {
            0
        } else {
            let ratio = 100.0 * score as f64 / total as f64;
            ratio.round() as u32
        };
        Some(QuizReport {
            score,
            total,
            percentage,
            band: ScoreBand::for_percentage(percentage),
        })
    }

    /// Annotation for one option of one question, post-submission.
    #[must_use]
    pub fn mark(&self, index: usize, option: &str) -> OptionMark {
        if !self.submitted {
            return OptionMark::Plain;
        }
        let Some(question) = self.questions.get(index) else {
            return OptionMark::Plain;
        };
        if option == question.answer {
            OptionMark::Correct
        } else if self.is_selected(index, option) {
            OptionMark::Incorrect
        } else {
            OptionMark::Plain
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
