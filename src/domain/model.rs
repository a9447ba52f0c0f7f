use crate::utils::error::{AssignError, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// The entity receiving the phone numbers. Exactly one of the two CLI flags
/// resolves into one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelector {
    Connector(String),
    ConnectorGroup(String),
}

impl TargetSelector {
    pub fn from_args(
        voice_connector_id: Option<String>,
        voice_connector_group_id: Option<String>,
    ) -> Result<Self> {
        match (voice_connector_id, voice_connector_group_id) {
            (Some(id), None) => Ok(Self::Connector(id)),
            (None, Some(id)) => Ok(Self::ConnectorGroup(id)),
            (None, None) => Err(AssignError::ValidationError {
                message: "either a voice connector id or a voice connector group id is required"
                    .to_string(),
            }),
            (Some(_), Some(_)) => Err(AssignError::ValidationError {
                message: "voice connector id and voice connector group id are mutually exclusive"
                    .to_string(),
            }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connector(_) => "voice connector",
            Self::ConnectorGroup(_) => "voice connector group",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Connector(id) | Self::ConnectorGroup(id) => id,
        }
    }
}

/// One record from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberRecord {
    pub e164_phone_number: String,
}

/// One page of the listing response. A missing `PhoneNumbers` collection is a
/// malformed page, distinct from an empty one; the pagination loop treats it
/// as a non-fatal early stop.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberPage {
    pub phone_numbers: Option<Vec<PhoneNumberRecord>>,
    pub next_token: Option<String>,
}

/// One entry in the association response's error list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberError {
    pub phone_number_id: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Response of an association call. The endpoint only reports failures; an
/// absent or empty error list means the whole batch went through.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationOutcome {
    pub phone_number_errors: Option<Vec<PhoneNumberError>>,
}

/// A batch partitioned into succeeded and failed numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl BatchResult {
    /// Numbers named in the error list are failed, the rest of the chunk
    /// succeeded. There is no positive per-number confirmation from the
    /// endpoint; absence from the error list is taken as success. Error
    /// entries naming numbers outside the chunk are ignored, so the two sides
    /// always partition the chunk exactly.
    pub fn classify(requested: &[String], outcome: &AssociationOutcome) -> Self {
        let errors: HashSet<&str> = outcome
            .phone_number_errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.phone_number_id.as_str())
            .collect();

        let (failed, succeeded) = requested
            .iter()
            .cloned()
            .partition(|number| errors.contains(number.as_str()));

        Self { succeeded, failed }
    }
}

/// Running totals across all batches. `total == succeeded + failed` holds at
/// all times by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn absorb(&mut self, batch: &BatchResult) {
        self.total += batch.succeeded.len() + batch.failed.len();
        self.succeeded += batch.succeeded.len();
        self.failed += batch.failed.len();
    }
}
