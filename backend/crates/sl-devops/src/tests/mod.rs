
use sl_config::{AzureDevOpsConfig, Secret};

pub(crate) fn complete_config() -> AzureDevOpsConfig {
    AzureDevOpsConfig {
        organization: Some("contoso".to_string()),
        project: Some("Voice Agent".to_string()),
        personal_access_token: Some(Secret::new("pat-123")),
        ..Default::default()
    }
}
