use crate::domain::model::{BatchResult, RunSummary, TargetSelector};
use crate::domain::ports::{Confirmation, Delay, IdentityApi, TelephonyApi};
use crate::utils::error::Result;

/// Numbers associated per request, matching the provider's batch limit.
pub const BATCH_SIZE: usize = 10;

/// Drives the whole run: confirm intent, page through the unassigned numbers,
/// associate them in batches, report the totals.
pub struct AssignEngine<T, I, C, D> {
    telephony: T,
    identity: I,
    confirmation: C,
    delay: D,
    target: TargetSelector,
    batch_size: usize,
}

impl<T, I, C, D> AssignEngine<T, I, C, D>
where
    T: TelephonyApi,
    I: IdentityApi,
    C: Confirmation,
    D: Delay,
{
    pub fn new(telephony: T, identity: I, confirmation: C, delay: D, target: TargetSelector) -> Self {
        Self {
            telephony,
            identity,
            confirmation,
            delay,
            target,
            batch_size: BATCH_SIZE,
        }
    }

    /// Runs the full pipeline. Returns `None` when the operator declines the
    /// confirmation prompt; an aborted run is not a failure.
    pub async fn run(&self) -> Result<Option<RunSummary>> {
        let account_id = self.identity.account_id().await?;

        tracing::info!(
            "Assigning unassigned phone numbers of account {} to {} with id {}",
            account_id,
            self.target.kind(),
            self.target.id(),
        );
        if !self.confirmation.confirm("Proceed?").await? {
            tracing::info!("Exiting");
            return Ok(None);
        }

        tracing::info!(
            "Listing all unassigned phone numbers in the account {}",
            account_id
        );
        let numbers = self.collect_unassigned().await?;
        tracing::info!("Found {} unassigned phone numbers", numbers.len());

        let summary = self.associate_all(&numbers).await?;

        tracing::info!("Run summary:");
        tracing::info!("Total:    {}", summary.total);
        tracing::info!("Success:  {}", summary.succeeded);
        tracing::info!("Failure:  {}", summary.failed);

        Ok(Some(summary))
    }

    /// Pages through the listing endpoint, preserving page order and
    /// within-page order. A page with no phone numbers collection at all is
    /// malformed: stop paginating, keep what was collected so far.
    async fn collect_unassigned(&self) -> Result<Vec<String>> {
        let mut numbers = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self.telephony.list_unassigned(next_token.as_deref()).await?;
            tracing::debug!("Response from list phone numbers: {:?}", page);

            let Some(records) = page.phone_numbers else {
                tracing::error!("No phone numbers collection in list response");
                break;
            };
            numbers.extend(records.into_iter().map(|record| record.e164_phone_number));

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
            self.delay.pause().await;
        }

        Ok(numbers)
    }

    /// One association call per chunk, in order. Failed numbers are logged
    /// and counted, never resubmitted.
    async fn associate_all(&self, numbers: &[String]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for chunk in numbers.chunks(self.batch_size) {
            tracing::info!(
                "Associating phone numbers to {} {}: {}",
                self.target.kind(),
                self.target.id(),
                chunk.join(", "),
            );

            let outcome = self.telephony.associate(&self.target, chunk).await?;
            tracing::debug!(
                "Response from associating phone numbers {}: {:?}",
                chunk.join(", "),
                outcome,
            );

            let batch = BatchResult::classify(chunk, &outcome);
            if !batch.succeeded.is_empty() {
                tracing::info!(
                    "Successfully associated phone numbers to {} {}: {}",
                    self.target.kind(),
                    self.target.id(),
                    batch.succeeded.join(", "),
                );
            }
            if !batch.failed.is_empty() {
                tracing::error!(
                    "Failed to associate phone numbers {}",
                    batch.failed.join(", ")
                );
            }
            summary.absorb(&batch);

            self.delay.pause().await;
        }

        Ok(summary)
    }
}
