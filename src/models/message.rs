// src/models/message.rs
// DOCUMENTATION: Contact form payload and submission receipt
// PURPOSE: Forms the site posts through the gateway

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Enquiry sent from the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 40))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// Returned to the site once a form has been forwarded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Local reference for correlating logs with the submission
    pub reference: Uuid,
    pub accepted: bool,
    pub message: String,
}

impl SubmissionReceipt {
    pub fn accepted(reference: Uuid, message: impl Into<String>) -> Self {
        Self {
            reference,
            accepted: true,
            message: message.into(),
        }
    }
}
