#![forbid(unsafe_code)]

use crate::AppError;
use ld_core::quiz::{Marks, Question, QuizSession, QuizState, default_bank};

/// How an answer button is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerMark {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizFrame {
    Question {
        progress: String,
        prompt: String,
        answers: Vec<(String, AnswerMark)>,
        can_advance: bool,
        advance_label: &'static str,
    },
    Complete {
        summary: String,
    },
}

pub struct QuizPanel {
    session: QuizSession,
    marks: Option<Marks>,
    frame: QuizFrame,
    renders: u64,
}

impl QuizPanel {
    pub fn new(questions: Vec<Question>) -> Result<Self, AppError> {
        let session = QuizSession::new(questions)?;
        let mut panel = Self {
            session,
            marks: None,
            frame: QuizFrame::Complete {
                summary: String::new(),
            },
            renders: 0,
        };
        panel.render();
        Ok(panel)
    }

    pub fn with_default_bank() -> Result<Self, AppError> {
        Self::new(default_bank())
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn frame(&self) -> &QuizFrame {
        &self.frame
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn select(&mut self, choice: usize) -> Result<(), AppError> {
        self.session.select(choice)?;
        self.render();
        Ok(())
    }

    /// Locks the current pick and shows which answer was right.
    pub fn reveal(&mut self) -> Result<Marks, AppError> {
        let marks = self.session.reveal()?;
        self.marks = Some(marks);
        self.render();
        Ok(marks)
    }

    /// Picks and reveals in one step, the way a click on an answer behaves.
    pub fn answer(&mut self, choice: usize) -> Result<Marks, AppError> {
        self.session.select(choice)?;
        self.reveal()
    }

    pub fn advance(&mut self) -> Result<QuizState, AppError> {
        let state = self.session.advance()?;
        self.marks = None;
        self.render();
        Ok(state)
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.marks = None;
        self.render();
    }

    fn render(&mut self) {
        self.frame = match self.session.current_question() {
            None => QuizFrame::Complete {
                summary: self.session.summary().unwrap_or_default(),
            },
            Some(question) => {
                let selected = self.session.selected();
                let answers = question
                    .answers
                    .iter()
                    .enumerate()
                    .map(|(i, answer)| (answer.clone(), mark_for(i, selected, self.marks)))
                    .collect();
                QuizFrame::Question {
                    progress: self.session.progress_label().unwrap_or_default(),
                    prompt: question.prompt.clone(),
                    answers,
                    can_advance: self.session.can_advance(),
                    advance_label: self.session.advance_label(),
                }
            }
        };
        self.renders += 1;
    }
}

fn mark_for(index: usize, selected: Option<usize>, marks: Option<Marks>) -> AnswerMark {
    match marks {
        Some(marks) if marks.correct == index => AnswerMark::Correct,
        Some(marks) if marks.incorrect == Some(index) => AnswerMark::Incorrect,
        Some(_) => AnswerMark::Plain,
        None if selected == Some(index) => AnswerMark::Selected,
        None => AnswerMark::Plain,
    }
}
