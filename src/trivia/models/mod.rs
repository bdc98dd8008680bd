// Models module - Question and Category records

pub mod category;
pub mod question;

pub use category::Category;
pub use question::{NewQuestion, Question};
