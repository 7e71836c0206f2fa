//! The symptom-matching quiz.
//!
//! An independent, stateless-in-spirit lookup from a symptom description to
//! the failure shape it most strongly matches. The quiz owns a cursor over a
//! fixed ordered list of three questions and the currently picked label;
//! it has no dependency on the session. Answer labels are the canonical
//! [`FailureShape`] labels, so they cross-reference the scenario vocabulary
//! byte-for-byte.

use crate::scenario::FailureShape;

/// One symptom pattern and the shape it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    /// The symptom description shown to the user.
    pub prompt: &'static str,
    /// The correct failure shape.
    pub answer: FailureShape,
}

/// The three fixed questions, in presentation order.
pub static QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        prompt: "QPS spikes during the outage; p99 explodes; errors sometimes recover on retry.",
        answer: FailureShape::LoadAmplification,
    },
    QuizQuestion {
        prompt: "Timeouts without errors; partial hangs; recovery takes a long time after the fix.",
        answer: FailureShape::BackpressureCollapse,
    },
    QuizQuestion {
        prompt: "Hard limit hit (connections/threads); flapping availability; restart helps \
                 briefly then relapses.",
        answer: FailureShape::ResourceExhaustion,
    },
];

/// Diagnostic mini-quiz: a wrapping cursor over [`QUESTIONS`] plus the
/// label the user has currently picked.
#[derive(Debug, Clone, Default)]
pub struct SymptomQuiz {
    cursor: usize,
    picked: Option<String>,
}

impl SymptomQuiz {
    /// Start at the first question with nothing picked.
    pub fn new() -> Self {
        Self::default()
    }

    /// The question under the cursor.
    pub fn current_question(&self) -> &'static QuizQuestion {
        &QUESTIONS[self.cursor]
    }

    /// Record a picked label. Does not move the cursor; picking again
    /// replaces the previous pick.
    pub fn pick(&mut self, label: &str) {
        self.picked = Some(label.to_string());
    }

    /// The currently picked label, if any.
    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    /// Whether the picked label matches the current question's answer.
    ///
    /// Byte-for-byte label equality, no fuzzy matching. `None` until
    /// something has been picked.
    pub fn is_correct(&self) -> Option<bool> {
        self.picked
            .as_deref()
            .map(|picked| picked == self.current_question().answer.label())
    }

    /// The correct label for the current question (feedback surface,
    /// meant to be shown only after a pick).
    pub fn correct_label(&self) -> &'static str {
        self.current_question().answer.label()
    }

    /// Clear the pick and advance the cursor, wrapping after the last
    /// question.
    pub fn next(&mut self) {
        self.picked = None;
        self.cursor = (self.cursor + 1) % QUESTIONS.len();
    }
}
