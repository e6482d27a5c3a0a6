use std::sync::Arc;

use crate::inbox::application::domain::{ContactMessage, ProjectFeedback, ProjectQuestion};
use crate::inbox::application::ports::incoming::use_cases::{AnswerQuestionUseCase, InboxUseCase};

#[derive(Clone)]
pub struct InboxUseCases {
    pub messages: Arc<dyn InboxUseCase<ContactMessage>>,
    pub questions: Arc<dyn InboxUseCase<ProjectQuestion>>,
    pub answer_question: Arc<dyn AnswerQuestionUseCase>,
    pub feedback: Arc<dyn InboxUseCase<ProjectFeedback>>,
}
