use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cmp::Reverse;
use utoipa::ToSchema;
use uuid::Uuid;

use super::status::{FeedbackStatus, InboxStatus, MessageStatus, QuestionStatus};
use crate::content::application::domain::validation::require_text;
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    CollectionEntity, NoFilter, Record, ValidationError,
};

/// A visitor-submitted record with a status lifecycle.
pub trait InboxEntity: CollectionEntity {
    type Status: InboxStatus;
    type Submission: DeserializeOwned + Send + 'static;

    /// Whether opening an unprocessed record marks it processed.
    const OPEN_MARKS_PROCESSED: bool = false;

    fn from_submission(submission: Self::Submission) -> Result<Self, ValidationError>;

    fn status(&self) -> Self::Status;

    fn status_patch(status: Self::Status) -> Self::Patch;
}

//
// ──────────────────────────────────────────────────────────
// Shared pieces
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound = "S: InboxStatus")]
pub struct StatusPatch<S> {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub status: PatchField<S>,
}

fn validate_sender(name: &str, email: &str) -> Result<(), ValidationError> {
    require_text("name", name, 100)?;
    if !EmailAddress::is_valid(email) {
        return Err(ValidationError::new("email", "must be a valid email address"));
    }
    Ok(())
}

fn newest_first<T>(records: &mut [Record<T>]) {
    records.sort_by_key(|r| Reverse(r.created_at));
}

//
// ──────────────────────────────────────────────────────────
// Contact messages
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactSubmission {
    #[schema(example = "Jane Visitor")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[schema(example = "Loved the portfolio, are you open to freelance work?")]
    pub message: String,
}

impl CollectionEntity for ContactMessage {
    const COLLECTION: &'static str = "contact_messages";
    type Patch = StatusPatch<MessageStatus>;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_sender(&self.name, &self.email)?;
        if let Some(subject) = &self.subject {
            require_text("subject", subject, 200)?;
        }
        require_text("message", &self.message, 5000)
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.subject = self
            .subject
            .take()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.message = self.message.trim().to_string();
    }

    fn sort(records: &mut [Record<Self>]) {
        newest_first(records);
    }
}

impl InboxEntity for ContactMessage {
    type Status = MessageStatus;
    type Submission = ContactSubmission;

    const OPEN_MARKS_PROCESSED: bool = true;

    fn from_submission(s: ContactSubmission) -> Result<Self, ValidationError> {
        Ok(Self {
            name: s.name,
            email: s.email,
            subject: s.subject,
            message: s.message,
            status: MessageStatus::INITIAL,
        })
    }

    fn status(&self) -> MessageStatus {
        self.status
    }

    fn status_patch(status: MessageStatus) -> Self::Patch {
        StatusPatch {
            status: PatchField::Value(status),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Project questions
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectQuestion {
    pub project_id: Uuid,
    pub project_title: String,
    pub name: String,
    pub email: String,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: QuestionStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuestionSubmission {
    pub project_id: Uuid,
    #[schema(example = "Portfolio CMS")]
    pub project_title: String,
    #[schema(example = "Jane Visitor")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Which database does this project use?")]
    pub question: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub status: PatchField<QuestionStatus>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub answer: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub answered_at: PatchField<DateTime<Utc>>,
}

impl QuestionPatch {
    pub fn answered(answer: String, at: DateTime<Utc>) -> Self {
        Self {
            status: PatchField::Value(QuestionStatus::Answered),
            answer: PatchField::Value(answer),
            answered_at: PatchField::Value(at),
        }
    }
}

impl CollectionEntity for ProjectQuestion {
    const COLLECTION: &'static str = "project_questions";
    type Patch = QuestionPatch;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_sender(&self.name, &self.email)?;
        require_text("project_title", &self.project_title, 200)?;
        require_text("question", &self.question, 2000)?;
        if let Some(answer) = &self.answer {
            require_text("answer", answer, 5000)?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.project_title = self.project_title.trim().to_string();
        self.question = self.question.trim().to_string();
        if let Some(answer) = &mut self.answer {
            *answer = answer.trim().to_string();
        }
    }

    fn sort(records: &mut [Record<Self>]) {
        newest_first(records);
    }
}

impl InboxEntity for ProjectQuestion {
    type Status = QuestionStatus;
    type Submission = QuestionSubmission;

    fn from_submission(s: QuestionSubmission) -> Result<Self, ValidationError> {
        Ok(Self {
            project_id: s.project_id,
            project_title: s.project_title,
            name: s.name,
            email: s.email,
            question: s.question,
            answer: None,
            answered_at: None,
            status: QuestionStatus::INITIAL,
        })
    }

    fn status(&self) -> QuestionStatus {
        self.status
    }

    fn status_patch(status: QuestionStatus) -> Self::Patch {
        QuestionPatch {
            status: PatchField::Value(status),
            ..Default::default()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Project feedback
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFeedback {
    pub project_id: Uuid,
    pub project_title: String,
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub feedback: String,
    #[serde(default)]
    pub status: FeedbackStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FeedbackSubmission {
    pub project_id: Uuid,
    #[schema(example = "Portfolio CMS")]
    pub project_title: String,
    #[schema(example = "Jane Visitor")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: u8,
    #[schema(example = "Clean UI and fast.")]
    pub feedback: String,
}

impl CollectionEntity for ProjectFeedback {
    const COLLECTION: &'static str = "project_feedback";
    type Patch = StatusPatch<FeedbackStatus>;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_sender(&self.name, &self.email)?;
        require_text("project_title", &self.project_title, 200)?;
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::new("rating", "must be between 1 and 5"));
        }
        require_text("feedback", &self.feedback, 5000)
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.project_title = self.project_title.trim().to_string();
        self.feedback = self.feedback.trim().to_string();
    }

    fn sort(records: &mut [Record<Self>]) {
        newest_first(records);
    }
}

impl InboxEntity for ProjectFeedback {
    type Status = FeedbackStatus;
    type Submission = FeedbackSubmission;

    fn from_submission(s: FeedbackSubmission) -> Result<Self, ValidationError> {
        Ok(Self {
            project_id: s.project_id,
            project_title: s.project_title,
            name: s.name,
            email: s.email,
            rating: s.rating,
            feedback: s.feedback,
            status: FeedbackStatus::INITIAL,
        })
    }

    fn status(&self) -> FeedbackStatus {
        self.status
    }

    fn status_patch(status: FeedbackStatus) -> Self::Patch {
        StatusPatch {
            status: PatchField::Value(status),
        }
    }
}
