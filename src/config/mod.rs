use crate::domain::model::TargetSelector;
use crate::utils::error::{AssignError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

pub const API_ENDPOINT_VAR: &str = "VOICE_API_ENDPOINT";
pub const IDENTITY_ENDPOINT_VAR: &str = "VOICE_IDENTITY_ENDPOINT";
pub const API_TOKEN_VAR: &str = "VOICE_API_TOKEN";

#[derive(Debug, Clone, Parser)]
#[command(name = "vc-assign")]
#[command(about = "Associate unassigned phone numbers with a voice connector or voice connector group")]
pub struct CliConfig {
    /// The Voice Connector Id
    #[arg(long = "voice_connector_id")]
    pub voice_connector_id: Option<String>,

    /// The Voice Connector Group Id
    #[arg(long = "voice_connector_group_id")]
    pub voice_connector_group_id: Option<String>,
}

impl CliConfig {
    /// Resolves the two mutually exclusive flags into the target selector.
    pub fn target(&self) -> Result<TargetSelector> {
        TargetSelector::from_args(
            self.voice_connector_id.clone(),
            self.voice_connector_group_id.clone(),
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.voice_connector_id {
            validate_non_empty_string("voice_connector_id", id)?;
        }
        if let Some(id) = &self.voice_connector_group_id {
            validate_non_empty_string("voice_connector_group_id", id)?;
        }
        self.target().map(|_| ())
    }
}

/// Service endpoints and the ambient credential token, read once from the
/// environment at startup.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub api: String,
    pub identity: String,
    pub auth_token: Option<String>,
}

impl Endpoints {
    pub fn from_env() -> Result<Self> {
        let endpoints = Self {
            api: require_var(API_ENDPOINT_VAR)?,
            identity: require_var(IDENTITY_ENDPOINT_VAR)?,
            // An empty token var means unauthenticated, same as an unset one.
            auth_token: std::env::var(API_TOKEN_VAR)
                .ok()
                .filter(|token| !token.is_empty()),
        };
        endpoints.validate()?;
        Ok(endpoints)
    }
}

impl Validate for Endpoints {
    fn validate(&self) -> Result<()> {
        validate_url(API_ENDPOINT_VAR, &self.api)?;
        validate_url(IDENTITY_ENDPOINT_VAR, &self.identity)?;
        Ok(())
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| AssignError::MissingConfigError {
        field: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        voice_connector_id: Option<&str>,
        voice_connector_group_id: Option<&str>,
    ) -> CliConfig {
        CliConfig {
            voice_connector_id: voice_connector_id.map(String::from),
            voice_connector_group_id: voice_connector_group_id.map(String::from),
        }
    }

    #[test]
    fn test_exactly_one_target_id_is_required() {
        assert!(config(Some("vc-1"), None).validate().is_ok());
        assert!(config(None, Some("vcg-1")).validate().is_ok());
        assert!(config(None, None).validate().is_err());
        assert!(config(Some("vc-1"), Some("vcg-1")).validate().is_err());
    }

    #[test]
    fn test_empty_target_id_is_rejected() {
        assert!(config(Some(""), None).validate().is_err());
        assert!(config(None, Some("  ")).validate().is_err());
    }

    #[test]
    fn test_target_resolves_to_matching_variant() {
        let target = config(Some("vc-1"), None).target().unwrap();
        assert_eq!(target, TargetSelector::Connector("vc-1".to_string()));

        let target = config(None, Some("vcg-1")).target().unwrap();
        assert_eq!(target, TargetSelector::ConnectorGroup("vcg-1".to_string()));
    }

    // Single test for all env-var cases: tests run in parallel threads and
    // the process environment is shared.
    #[test]
    fn test_endpoints_from_env_ignores_empty_token() {
        std::env::set_var(API_ENDPOINT_VAR, "https://voice.example.com");
        std::env::set_var(IDENTITY_ENDPOINT_VAR, "https://identity.example.com");

        std::env::set_var(API_TOKEN_VAR, "");
        assert!(Endpoints::from_env().unwrap().auth_token.is_none());

        std::env::set_var(API_TOKEN_VAR, "secret-token");
        assert_eq!(
            Endpoints::from_env().unwrap().auth_token.as_deref(),
            Some("secret-token")
        );

        std::env::remove_var(API_TOKEN_VAR);
        assert!(Endpoints::from_env().unwrap().auth_token.is_none());
    }

    #[test]
    fn test_endpoints_validation_rejects_bad_urls() {
        let endpoints = Endpoints {
            api: "not-a-url".to_string(),
            identity: "https://identity.example.com".to_string(),
            auth_token: None,
        };
        assert!(endpoints.validate().is_err());

        let endpoints = Endpoints {
            api: "https://voice.example.com".to_string(),
            identity: "https://identity.example.com".to_string(),
            auth_token: Some("token".to_string()),
        };
        assert!(endpoints.validate().is_ok());
    }
}
