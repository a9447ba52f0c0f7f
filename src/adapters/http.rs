use crate::domain::model::{AssociationOutcome, PhoneNumberPage, TargetSelector};
use crate::domain::ports::{IdentityApi, TelephonyApi};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AssociationRequest {
    e164_phone_numbers: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CallerIdentity {
    account: String,
}

/// Telephony provider client over the REST contract:
/// `GET /phone-numbers` for listing, `POST /voice-connectors/{id}/phone-numbers`
/// and `POST /voice-connector-groups/{id}/phone-numbers` for association.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ProviderClient {
    pub fn new(base_url: String, auth_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            auth_token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl TelephonyApi for ProviderClient {
    async fn list_unassigned(&self, next_token: Option<&str>) -> Result<PhoneNumberPage> {
        let mut request = self
            .http
            .get(self.endpoint("/phone-numbers"))
            .query(&[("status", "Unassigned")]);
        if let Some(token) = next_token {
            request = request.query(&[("next-token", token)]);
        }

        let page = self
            .authorize(request)
            .send()
            .await?
            .error_for_status()?
            .json::<PhoneNumberPage>()
            .await?;
        Ok(page)
    }

    async fn associate(
        &self,
        target: &TargetSelector,
        numbers: &[String],
    ) -> Result<AssociationOutcome> {
        let path = match target {
            TargetSelector::Connector(id) => format!("/voice-connectors/{}/phone-numbers", id),
            TargetSelector::ConnectorGroup(id) => {
                format!("/voice-connector-groups/{}/phone-numbers", id)
            }
        };
        let body = AssociationRequest {
            e164_phone_numbers: numbers.to_vec(),
        };

        let outcome = self
            .authorize(self.http.post(self.endpoint(&path)).json(&body))
            .send()
            .await?
            .error_for_status()?
            .json::<AssociationOutcome>()
            .await?;
        Ok(outcome)
    }
}

/// Identity service client: `GET /caller-identity` returns the account id.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl IdentityClient {
    pub fn new(base_url: String, auth_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            auth_token,
        }
    }
}

#[async_trait]
impl IdentityApi for IdentityClient {
    async fn account_id(&self) -> Result<String> {
        let url = format!("{}/caller-identity", self.base_url.trim_end_matches('/'));
        let mut request = self.http.get(url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let identity = request
            .send()
            .await?
            .error_for_status()?
            .json::<CallerIdentity>()
            .await?;
        Ok(identity.account)
    }
}
