use crate::domain::ports::{Confirmation, Delay};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;

/// Production confirmation gate: prints the prompt and blocks on one line of
/// stdin. Only the exact answer `y` proceeds.
pub struct StdinConfirmation;

#[async_trait]
impl Confirmation for StdinConfirmation {
    async fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} (y/n): ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']) == "y")
    }
}

/// Fixed pause between remote calls, to stay under the provider's rate limits.
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Delay for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.interval).await;
    }
}
