//! # yatri-chat
//!
//! The multilingual tourism assistant: language-aware response dispatch,
//! chat sessions and the voice guide.

pub mod dispatch;
pub mod guide;
mod keywords;
pub mod responses;
pub mod session;
pub mod topics;


pub use dispatch::{dispatch, Reply};
pub use session::{ChatSession, QUICK_QUESTIONS};
pub use topics::{match_topic, Topic};
