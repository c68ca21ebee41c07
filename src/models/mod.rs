pub mod question;
pub mod rating;
pub mod ticket;
pub mod user;

pub use question::{Question, Satisfaction};
pub use rating::{QuestionAnswer, Rating};
pub use ticket::{Attendant, Ticket};
pub use user::User;
