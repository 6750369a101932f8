#![forbid(unsafe_code)]

use ld_app::{AnswerMark, AppError, QuizFrame, QuizPanel};
use ld_core::quiz::{Question, QuizError, QuizState};

fn marks(panel: &QuizPanel) -> Vec<AnswerMark> {
    match panel.frame() {
        QuizFrame::Question { answers, .. } => answers.iter().map(|(_, mark)| *mark).collect(),
        QuizFrame::Complete { .. } => Vec::new(),
    }
}

#[test]
fn all_correct_answers_score_the_whole_bank() {
    let mut panel = QuizPanel::with_default_bank().expect("bank");
    let QuizFrame::Question { progress, .. } = panel.frame() else {
        panic!("quiz starts on a question");
    };
    assert_eq!(progress, "Question 1 of 3");

    for correct in [1, 2, 1] {
        let result = panel.answer(correct).expect("answer");
        assert!(result.was_correct());
        panel.advance().expect("advance");
    }

    assert_eq!(panel.session().score(), 3);
    assert_eq!(
        panel.frame(),
        &QuizFrame::Complete {
            summary: "Your Score: 3/3 🎉 Excellent!".to_string()
        }
    );
}

#[test]
fn wrong_pick_marks_both_buttons() {
    let mut panel = QuizPanel::with_default_bank().expect("bank");
    let result = panel.answer(0).expect("answer");
    assert_eq!(result.incorrect, Some(0));
    assert_eq!(
        marks(&panel),
        vec![AnswerMark::Incorrect, AnswerMark::Correct, AnswerMark::Plain]
    );
    let QuizFrame::Question {
        can_advance,
        advance_label,
        ..
    } = panel.frame()
    else {
        panic!("still on the question");
    };
    assert!(*can_advance);
    assert_eq!(*advance_label, "Next Question");
}

#[test]
fn pick_can_change_until_revealed() {
    let mut panel = QuizPanel::with_default_bank().expect("bank");
    panel.select(0).expect("select");
    panel.select(2).expect("reselect");
    assert_eq!(
        marks(&panel),
        vec![AnswerMark::Plain, AnswerMark::Plain, AnswerMark::Selected]
    );

    panel.reveal().expect("reveal");
    let err = panel.select(1).expect_err("locked");
    assert!(matches!(err, AppError::Quiz(QuizError::SelectionLocked)));
}

#[test]
fn advancing_needs_a_revealed_result() {
    let mut panel = QuizPanel::with_default_bank().expect("bank");
    let err = panel.advance().expect_err("nothing revealed");
    assert!(matches!(err, AppError::Quiz(QuizError::ResultNotShown)));
    panel.select(1).expect("select");
    let err = panel.advance().expect_err("selected but not revealed");
    assert!(matches!(err, AppError::Quiz(QuizError::ResultNotShown)));
    panel.reveal().expect("reveal");
    assert_eq!(
        panel.advance().expect("advance"),
        QuizState::AnsweringQuestion { index: 1 }
    );
}

#[test]
fn last_question_offers_finish_and_tiers_follow_the_ratio() {
    let bank = vec![
        Question::new("a?", &["x", "y"], 0),
        Question::new("b?", &["x", "y"], 1),
    ];
    let mut panel = QuizPanel::new(bank).expect("bank");
    panel.answer(0).expect("answer");
    panel.advance().expect("advance");
    panel.answer(0).expect("answer");
    let QuizFrame::Question { advance_label, .. } = panel.frame() else {
        panic!("still on the question");
    };
    assert_eq!(*advance_label, "Finish Quiz");
    panel.advance().expect("finish");
    assert_eq!(
        panel.frame(),
        &QuizFrame::Complete {
            summary: "Your Score: 1/2 👍 Good job!".to_string()
        }
    );

    panel.restart();
    panel.answer(1).expect("answer");
    panel.advance().expect("advance");
    panel.answer(0).expect("answer");
    panel.advance().expect("finish");
    assert_eq!(panel.session().score(), 0);
    assert_eq!(
        panel.frame(),
        &QuizFrame::Complete {
            summary: "Your Score: 0/2 💪 Keep practicing!".to_string()
        }
    );
}

#[test]
fn empty_bank_is_refused() {
    let err = QuizPanel::new(Vec::new()).err().expect("empty bank");
    assert!(matches!(err, AppError::Quiz(QuizError::EmptyBank)));
}
