use crate::{StoryError, StoryResult, WORK_ITEM_TYPE};

use sl_config::AzureDevOpsConfig;

use reqwest::Url;

/// `{base}/{organization}/{project}/_apis/wit/workitems/$User%20Story?api-version={v}`
///
/// Segments are percent-encoded, so project names with spaces are fine.
pub fn work_items_url(config: &AzureDevOpsConfig) -> StoryResult<Url> {
    let (Some(organization), Some(project)) =
        (config.organization.as_deref(), config.project.as_deref())
    else {
        return Err(StoryError::configuration(
            "organization and project must be set",
        ));
    };

    let mut url = Url::parse(&config.base_url).map_err(|e| {
        StoryError::configuration(format!("invalid base_url '{}': {e}", config.base_url))
    })?;

    url.path_segments_mut()
        .map_err(|()| {
            StoryError::configuration(format!(
                "base_url '{}' cannot carry a path",
                config.base_url
            ))
        })?
        .pop_if_empty()
        .extend([
            organization,
            project,
            "_apis",
            "wit",
            "workitems",
            WORK_ITEM_TYPE,
        ]);

    url.query_pairs_mut()
        .append_pair("api-version", &config.api_version);

    Ok(url)
}
