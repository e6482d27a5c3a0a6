pub mod entities;
pub mod status;

pub use entities::{
    ContactMessage, ContactSubmission, FeedbackSubmission, InboxEntity, ProjectFeedback,
    ProjectQuestion, QuestionPatch, QuestionSubmission, StatusPatch,
};
pub use status::{FeedbackStatus, InboxStatus, MessageStatus, QuestionStatus};
