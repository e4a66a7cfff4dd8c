use crate::{
    CreationRequest, CreationResult, JSON_PATCH_CONTENT_TYPE, StoryCreator, StoryError,
    StoryResult, build_payload, interpret_response, work_items_url,
};

use sl_config::{AuthScheme, AzureDevOpsConfig, Secret};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::{debug, info, warn};
use reqwest::Client as ReqwestClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};

/// Creates user stories through the Azure DevOps work item API.
///
/// Holds the shared, read-only config and a pooled HTTP client with the
/// configured timeout. Safe to share across concurrent callers.
pub struct WorkItemCreator {
    config: Arc<AzureDevOpsConfig>,
    client: ReqwestClient,
}

impl WorkItemCreator {
    /// Create a new creator
    ///
    /// # Arguments
    /// * `config` - Normalized Azure DevOps settings, possibly incomplete
    pub fn new(config: Arc<AzureDevOpsConfig>) -> StoryResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("storyline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoryError::transport(e, &Secret::new("")))?;

        Ok(Self { config, client })
    }

    /// Send one create request for an already-validated story.
    ///
    /// Fails with a configuration error, without touching the network, when
    /// organization, project or token is missing.
    pub async fn create(&self, request: &CreationRequest) -> StoryResult<CreationResult> {
        let credential = self.credential()?;
        let url = work_items_url(&self.config)?;
        let payload = build_payload(request, &self.config);
        let authorization = authorization_header(self.config.auth_scheme, credential)?;

        debug!(
            "POST {} with {} patch operations",
            url.path(),
            payload.len()
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoryError::transport(e, credential))?;

        let status = response.status().as_u16();
        let raw_body = response
            .text()
            .await
            .map_err(|e| StoryError::transport(e, credential))?;
        let body = credential.scrub(&raw_body);

        debug!("Azure DevOps responded with HTTP {status}");
        interpret_response(status, &body, request.title())
    }

    fn credential(&self) -> StoryResult<&Secret> {
        let missing = self.config.missing_required();
        if !missing.is_empty() {
            return Err(StoryError::configuration(format!(
                "Azure DevOps settings missing: {}",
                missing.join(", ")
            )));
        }

        self.config
            .personal_access_token
            .as_ref()
            .ok_or_else(|| StoryError::configuration("Azure DevOps token missing"))
    }
}

#[async_trait]
impl StoryCreator for WorkItemCreator {
    async fn create_story(&self, title: &str, description: &str) -> StoryResult<CreationResult> {
        let request = CreationRequest::new(title, description)?;

        info!(
            "Creating user story '{}' in {}/{}",
            request.title(),
            self.config.organization.as_deref().unwrap_or("<unset>"),
            self.config.project.as_deref().unwrap_or("<unset>")
        );

        match self.create(&request).await {
            Ok(result) => {
                info!("Created work item #{} at {}", result.item_id, result.item_url);
                Ok(result)
            }
            Err(e) => {
                warn!("Story creation failed ({}): {} {}", e.kind(), e, e.location());
                Err(e)
            }
        }
    }
}

/// Header value for the configured scheme, flagged sensitive so it is
/// never printed by reqwest's own debug output.
fn authorization_header(scheme: AuthScheme, credential: &Secret) -> StoryResult<HeaderValue> {
    let raw = match scheme {
        AuthScheme::Bearer => format!("Bearer {}", credential.expose()),
        AuthScheme::Basic => format!(
            "Basic {}",
            BASE64.encode(format!(":{}", credential.expose()))
        ),
    };

    let mut value = HeaderValue::from_str(&raw).map_err(|_| {
        StoryError::configuration("Azure DevOps token contains characters not allowed in a header")
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let value = authorization_header(AuthScheme::Bearer, &Secret::new("abc")).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_basic_header_encodes_empty_user() {
        let value = authorization_header(AuthScheme::Basic, &Secret::new("abc")).unwrap();
        // base64(":abc")
        assert_eq!(value.to_str().unwrap(), "Basic OmFiYw==");
    }

    #[test]
    fn test_header_rejects_control_characters() {
        let result = authorization_header(AuthScheme::Bearer, &Secret::new("bad\ntoken"));
        let err = result.unwrap_err();
        assert!(matches!(err, StoryError::Configuration { .. }));
        assert!(!err.to_string().contains("bad\ntoken"));
    }
}
