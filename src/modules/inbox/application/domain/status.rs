use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;
use utoipa::ToSchema;

/// Three-state lifecycle shared by every inbox kind:
/// initial, processed (read / answered / reviewed) and archived.
///
/// Any move is allowed except processed back to initial.
pub trait InboxStatus:
    Copy + Eq + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const INITIAL: Self;
    const PROCESSED: Self;
    const ARCHIVED: Self;

    fn as_str(&self) -> &'static str;

    fn can_transition_to(self, next: Self) -> bool {
        !(self == Self::PROCESSED && next == Self::INITIAL)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Archived,
}

impl InboxStatus for MessageStatus {
    const INITIAL: Self = MessageStatus::New;
    const PROCESSED: Self = MessageStatus::Read;
    const ARCHIVED: Self = MessageStatus::Archived;

    fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Pending,
    Answered,
    Archived,
}

impl InboxStatus for QuestionStatus {
    const INITIAL: Self = QuestionStatus::Pending;
    const PROCESSED: Self = QuestionStatus::Answered;
    const ARCHIVED: Self = QuestionStatus::Archived;

    fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Pending => "pending",
            QuestionStatus::Answered => "answered",
            QuestionStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Reviewed,
    Archived,
}

impl InboxStatus for FeedbackStatus {
    const INITIAL: Self = FeedbackStatus::Pending;
    const PROCESSED: Self = FeedbackStatus::Reviewed;
    const ARCHIVED: Self = FeedbackStatus::Archived;

    fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Reviewed => "reviewed",
            FeedbackStatus::Archived => "archived",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_cannot_return_to_initial() {
        assert!(!MessageStatus::Read.can_transition_to(MessageStatus::New));
        assert!(!QuestionStatus::Answered.can_transition_to(QuestionStatus::Pending));
        assert!(!FeedbackStatus::Reviewed.can_transition_to(FeedbackStatus::Pending));
    }

    #[test]
    fn archived_can_be_restored_either_way() {
        assert!(MessageStatus::Archived.can_transition_to(MessageStatus::New));
        assert!(MessageStatus::Archived.can_transition_to(MessageStatus::Read));
    }

    #[test]
    fn forward_moves_and_repeats_are_allowed() {
        assert!(MessageStatus::New.can_transition_to(MessageStatus::Read));
        assert!(MessageStatus::New.can_transition_to(MessageStatus::Archived));
        assert!(MessageStatus::Read.can_transition_to(MessageStatus::Archived));
        assert!(MessageStatus::Read.can_transition_to(MessageStatus::Read));
    }

    #[test]
    fn statuses_use_lowercase_tags() {
        assert_eq!(
            serde_json::to_value(FeedbackStatus::Reviewed).unwrap(),
            serde_json::json!("reviewed")
        );
        assert_eq!(QuestionStatus::Answered.as_str(), "answered");
    }
}
