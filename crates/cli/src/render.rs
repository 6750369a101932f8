#![forbid(unsafe_code)]

use ld_app::{AnswerMark, CartView, PlannerFrame, QuizFrame, ShopFrame, TodoFrame};
use ld_core::progress::Progress;
use std::fmt::Write as _;

const BAR_WIDTH: usize = 20;

fn progress_bar(progress: &Progress) -> String {
    let filled = ((progress.percent() / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.width_style()
    )
}

fn notices(out: &mut String, notices: &[String]) {
    for notice in notices {
        let _ = writeln!(out, "! {notice}");
    }
}

pub(crate) fn todo(frame: &TodoFrame) -> String {
    let mut out = String::new();
    notices(&mut out, &frame.notices);
    let _ = writeln!(out, "filter: {}", frame.filter.as_str());
    if frame.rows.is_empty() {
        let _ = writeln!(out, "(no tasks)");
    }
    for row in &frame.rows {
        let mark = if row.completed { "x" } else { " " };
        let _ = writeln!(out, "#{:<4} [{mark}] {}", row.id.get(), row.text);
    }
    let _ = writeln!(out, "{}", frame.counts());
    let _ = writeln!(out, "{}", progress_bar(&frame.progress));
    out
}

pub(crate) fn planner(frame: &PlannerFrame) -> String {
    let mut out = String::new();
    notices(&mut out, &frame.notices);
    if frame.rows.is_empty() {
        let _ = writeln!(out, "(no tasks)");
    }
    for row in &frame.rows {
        let mark = if row.completed { "x" } else { " " };
        let due = match (&row.due_date, row.overdue) {
            (Some(due), true) => format!("  due {due} (overdue)"),
            (Some(due), false) => format!("  due {due}"),
            (None, _) => String::new(),
        };
        let _ = writeln!(
            out,
            "#{:<4} [{mark}] {} <{}>{due}",
            row.id.get(), row.text, row.category
        );
    }
    let _ = writeln!(out, "{}", progress_bar(&frame.progress));
    out
}

/// Catalog page only; the caller reports store notices.
pub(crate) fn shop(frame: &ShopFrame) -> String {
    let mut out = String::new();
    let page = &frame.page;
    if page.items.is_empty() {
        let _ = writeln!(out, "(no products match)");
    }
    for card in &page.items {
        let _ = writeln!(
            out,
            "#{:<3} {:<24} {:<12} ₹{:<7} {} ({})",
            card.id.get(), card.name, card.category, card.price, card.stars, card.rating
        );
    }
    let _ = writeln!(out, "{}", page.label());
    let _ = writeln!(out, "cart: {}", frame.cart_count);
    out
}

pub(crate) fn cart(view: &CartView) -> String {
    let mut out = String::new();
    if view.rows.is_empty() {
        let _ = writeln!(out, "(cart is empty)");
    }
    for row in &view.rows {
        let _ = writeln!(out, "#{:<4} {}", row.line_id.get(), row.label);
    }
    let _ = writeln!(out, "Total: ₹{}", view.total);
    out
}

pub(crate) fn quiz(frame: &QuizFrame) -> String {
    let mut out = String::new();
    match frame {
        QuizFrame::Question {
            progress,
            prompt,
            answers,
            ..
        } => {
            let _ = writeln!(out, "{progress}");
            let _ = writeln!(out, "{prompt}");
            for (i, (answer, mark)) in answers.iter().enumerate() {
                let tag = match mark {
                    AnswerMark::Plain => "",
                    AnswerMark::Selected => "  <",
                    AnswerMark::Correct => "  ✓",
                    AnswerMark::Incorrect => "  ✗",
                };
                let _ = writeln!(out, "  {}) {answer}{tag}", i + 1);
            }
        }
        QuizFrame::Complete { summary } => {
            let _ = writeln!(out, "{summary}");
        }
    }
    out
}
