use log::debug;
use thiserror::Error;

use self::definition::{Question, QuizDefinition};

pub mod definition;
mod feedback;
mod results;

pub use self::feedback::{classify, OptionFeedback};
pub use self::results::{QuizResult, Tier};


#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuizError {
    #[error("Operation not allowed right now: {0}")]
    InvalidTransition(&'static str),
    #[error("Option {index} is out of range for a question with {option_count} options")]
    OutOfRangeOption { index: usize, option_count: usize },
}

/// Outcome of recording an answer, for immediate caller feedback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub selected_option: usize,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Phase {
    NotStarted,
    InProgress(ProgressState),
    Finished(FinishedState),
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct ProgressState {
    current_index: usize,
    score: usize,
    selected_option: Option<usize>,
}

impl ProgressState {
    fn new() -> Self {
        ProgressState {
            current_index: 0,
            score: 0,
            selected_option: None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FinishedState {
    score: usize,
}

/// One play-through of the quiz.
///
/// Phases move `NotStarted → InProgress → Finished`, with an
/// unanswered/answered sub-state per question while in progress. All
/// operations are synchronous and leave the session untouched when they are
/// rejected.
pub struct QuizSession {
    definition: QuizDefinition,
    phase: Phase,
}

impl QuizSession {
    pub fn new(definition: QuizDefinition) -> QuizSession {
        QuizSession {
            definition,
            phase: Phase::NotStarted,
        }
    }

    /// Leaves the intro screen. Harmless when already started or finished.
    pub fn start(&mut self) {
        match self.phase {
            Phase::NotStarted => {
                debug!("Quiz started ({} questions)", self.definition.len());
                self.phase = Phase::InProgress(ProgressState::new());
            }
            _ => debug!("Ignoring redundant start"),
        }
    }

    /// Records an answer for the current question.
    ///
    /// A second call on the same question keeps the first selection and
    /// returns its outcome, so a question can never score twice.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<AnswerResult, QuizError> {
        let state = match &mut self.phase {
            Phase::InProgress(state) => state,
            _ => {
                return Err(QuizError::InvalidTransition(
                    "no question is awaiting an answer",
                ))
            }
        };
        let question = &self.definition.questions()[state.current_index];

        let option_count = question.options.len();
        if option_index >= option_count {
            return Err(QuizError::OutOfRangeOption {
                index: option_index,
                option_count,
            });
        }

        if let Some(selected_option) = state.selected_option {
            debug!("Ignoring repeat answer for question {}", question.id);
            return Ok(AnswerResult {
                selected_option,
                is_correct: selected_option == question.correct_option,
            });
        }

        let is_correct = option_index == question.correct_option;
        state.selected_option = Some(option_index);
        if is_correct {
            state.score += 1;
        }
        debug!(
            "Question {} answered with option {} ({})",
            question.id,
            option_index,
            if is_correct { "correct" } else { "incorrect" }
        );

        Ok(AnswerResult {
            selected_option: option_index,
            is_correct,
        })
    }

    /// Moves to the next question, or to the results when the current
    /// question was the last one.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        let state = match &mut self.phase {
            Phase::InProgress(state) => state,
            _ => return Err(QuizError::InvalidTransition("the quiz is not in progress")),
        };
        if state.selected_option.is_none() {
            return Err(QuizError::InvalidTransition(
                "the current question has not been answered",
            ));
        }

        if state.current_index + 1 == self.definition.len() {
            let score = state.score;
            debug!("Quiz finished with score {}", score);
            self.phase = Phase::Finished(FinishedState { score });
        } else {
            state.current_index += 1;
            state.selected_option = None;
        }
        Ok(())
    }

    /// Full reset, back to the intro screen. Valid in every phase.
    pub fn restart(&mut self) {
        debug!("Quiz restarted");
        self.phase = Phase::NotStarted;
    }

    pub fn has_started(&self) -> bool {
        !matches!(self.phase, Phase::NotStarted)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn question_count(&self) -> usize {
        self.definition.len()
    }

    /// The question awaiting an answer (or review), if any.
    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::InProgress(state) => Some(&self.definition.questions()[state.current_index]),
            _ => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.phase {
            Phase::InProgress(state) => Some(state.current_index),
            _ => None,
        }
    }

    pub fn score(&self) -> usize {
        match &self.phase {
            Phase::NotStarted => 0,
            Phase::InProgress(state) => state.score,
            Phase::Finished(state) => state.score,
        }
    }

    pub fn selected_option(&self) -> Option<usize> {
        match &self.phase {
            Phase::InProgress(state) => state.selected_option,
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option().is_some()
    }

    pub fn is_last_question(&self) -> bool {
        match &self.phase {
            Phase::InProgress(state) => state.current_index + 1 == self.definition.len(),
            _ => false,
        }
    }

    /// Presentation feedback for one option of the current question.
    pub fn classify_option(&self, option_index: usize) -> OptionFeedback {
        match &self.phase {
            Phase::InProgress(state) => {
                let question = &self.definition.questions()[state.current_index];
                classify(state.selected_option, question.correct_option, option_index)
            }
            _ => OptionFeedback::Neutral,
        }
    }

    /// The final summary. Only available once the session is finished.
    pub fn result(&self) -> Result<QuizResult, QuizError> {
        match &self.phase {
            Phase::Finished(state) => Ok(QuizResult::new(state.score, self.definition.len())),
            _ => Err(QuizError::InvalidTransition("the quiz is not finished")),
        }
    }
}
