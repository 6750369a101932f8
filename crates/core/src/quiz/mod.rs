#![forbid(unsafe_code)]

mod bank;

pub use bank::default_bank;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answers: Vec<String>,
    pub correct: usize,
}

impl Question {
    pub fn new(prompt: &str, answers: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            correct,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    AnsweringQuestion { index: usize },
    AnswerSelected { index: usize, choice: usize },
    ResultShown { index: usize, choice: usize },
    QuizComplete,
}

/// Button marks after a result is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marks {
    pub correct: usize,
    pub incorrect: Option<usize>,
}

impl Marks {
    pub fn was_correct(&self) -> bool {
        self.incorrect.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    KeepPracticing,
}

impl ScoreTier {
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Self::Excellent
        } else if score * 2 >= total {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "🎉 Excellent!",
            Self::Good => "👍 Good job!",
            Self::KeepPracticing => "💪 Keep practicing!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error("question {index} has no answer at its correct position")]
    InvalidQuestion { index: usize },
    #[error("choice {choice} is out of range (question has {len} answers)")]
    ChoiceOutOfRange { choice: usize, len: usize },
    #[error("answers are locked once the result is shown")]
    SelectionLocked,
    #[error("select an answer first")]
    NoSelection,
    #[error("reveal the result before moving on")]
    ResultNotShown,
    #[error("quiz is already complete")]
    Complete,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: QuizState,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        if let Some(index) = questions
            .iter()
            .position(|q| q.correct >= q.answers.len())
        {
            return Err(QuizError::InvalidQuestion { index });
        }
        Ok(Self {
            questions,
            state: QuizState::AnsweringQuestion { index: 0 },
            score: 0,
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::AnsweringQuestion { index }
            | QuizState::AnswerSelected { index, .. }
            | QuizState::ResultShown { index, .. } => Some(index),
            QuizState::QuizComplete => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            QuizState::AnswerSelected { choice, .. } | QuizState::ResultShown { choice, .. } => {
                Some(choice)
            }
            _ => None,
        }
    }

    /// Picks an answer. Until the result is revealed a new pick replaces the old one.
    pub fn select(&mut self, choice: usize) -> Result<(), QuizError> {
        let index = match self.state {
            QuizState::AnsweringQuestion { index } | QuizState::AnswerSelected { index, .. } => {
                index
            }
            QuizState::ResultShown { .. } => return Err(QuizError::SelectionLocked),
            QuizState::QuizComplete => return Err(QuizError::Complete),
        };
        let len = self.questions[index].answers.len();
        if choice >= len {
            return Err(QuizError::ChoiceOutOfRange { choice, len });
        }
        self.state = QuizState::AnswerSelected { index, choice };
        Ok(())
    }

    pub fn reveal(&mut self) -> Result<Marks, QuizError> {
        let (index, choice) = match self.state {
            QuizState::AnswerSelected { index, choice } => (index, choice),
            QuizState::AnsweringQuestion { .. } => return Err(QuizError::NoSelection),
            QuizState::ResultShown { .. } => return Err(QuizError::SelectionLocked),
            QuizState::QuizComplete => return Err(QuizError::Complete),
        };
        let correct = self.questions[index].correct;
        if choice == correct {
            self.score += 1;
        }
        self.state = QuizState::ResultShown { index, choice };
        Ok(Marks {
            correct,
            incorrect: (choice != correct).then_some(choice),
        })
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.state, QuizState::ResultShown { .. })
    }

    pub fn advance(&mut self) -> Result<QuizState, QuizError> {
        let index = match self.state {
            QuizState::ResultShown { index, .. } => index,
            QuizState::QuizComplete => return Err(QuizError::Complete),
            _ => return Err(QuizError::ResultNotShown),
        };
        self.state = if index + 1 < self.questions.len() {
            QuizState::AnsweringQuestion { index: index + 1 }
        } else {
            QuizState::QuizComplete
        };
        Ok(self.state)
    }

    pub fn reset(&mut self) {
        self.state = QuizState::AnsweringQuestion { index: 0 };
        self.score = 0;
    }

    pub fn is_complete(&self) -> bool {
        self.state == QuizState::QuizComplete
    }

    pub fn progress_label(&self) -> Option<String> {
        self.current_index()
            .map(|index| format!("Question {} of {}", index + 1, self.total()))
    }

    pub fn advance_label(&self) -> &'static str {
        match self.current_index() {
            Some(index) if index + 1 == self.total() => "Finish Quiz",
            _ => "Next Question",
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score, self.total())
    }

    pub fn summary(&self) -> Option<String> {
        self.is_complete().then(|| {
            format!(
                "Your Score: {}/{} {}",
                self.score,
                self.total(),
                self.tier().label()
            )
        })
    }
}
