#![forbid(unsafe_code)]

mod contact;
mod error;
mod joke_panel;
mod planner;
mod portfolio;
mod quiz_panel;
mod shop;
mod todo_board;

pub use contact::{ContactDesk, ContactReport, FormSubmitter, FormVariant};
pub use error::{AppError, FetchError, ImportError};
pub use joke_panel::{JokePanel, JokeSource};
pub use planner::{
    EXPORT_FILE_NAME, IMPORT_OK, PLANNER_KEY, Planner, PlannerDraft, PlannerFrame, PlannerRow,
    Submitted,
};
pub use portfolio::Portfolio;
pub use quiz_panel::{AnswerMark, QuizFrame, QuizPanel};
pub use shop::{
    CART_KEY, CHECKOUT_OK, CartRow, CartView, Checkout, EMPTY_CART, ProductCard, Shop, ShopFrame,
};
pub use todo_board::{TODO_KEY, TodoBoard, TodoFrame, TodoRow};
