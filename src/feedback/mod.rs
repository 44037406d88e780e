//! AI feedback generation via an external chat-completion API

pub mod client;
pub mod prompts;

pub use client::FeedbackClient;
