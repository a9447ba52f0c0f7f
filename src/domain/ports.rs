use crate::domain::model::{AssociationOutcome, PhoneNumberPage, TargetSelector};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Provider API surface the engine drives: paginated listing of unassigned
/// numbers and batched association against the selected target.
#[async_trait]
pub trait TelephonyApi: Send + Sync {
    async fn list_unassigned(&self, next_token: Option<&str>) -> Result<PhoneNumberPage>;

    async fn associate(
        &self,
        target: &TargetSelector,
        numbers: &[String],
    ) -> Result<AssociationOutcome>;
}

/// Resolves the caller's account identifier. Display only.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    async fn account_id(&self) -> Result<String>;
}

/// Operator confirmation gate, injected so tests can stub the prompt.
#[async_trait]
pub trait Confirmation: Send + Sync {
    async fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Inter-request pacing, injected so tests run without real time delays.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self);
}
