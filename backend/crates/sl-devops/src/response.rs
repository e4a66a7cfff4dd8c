use crate::{CreationResult, StoryError, StoryResult};

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct WorkItemBody {
    id: Option<u64>,
    #[serde(rename = "_links")]
    links: Option<WorkItemLinks>,
    fields: Option<HashMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct WorkItemLinks {
    html: Option<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: Option<String>,
}

/// Turn a status code and raw body into a result.
///
/// Pure function: the caller has already done the I/O and masked the
/// credential in `body`. `submitted_title` is used when the response does
/// not echo `System.Title` back.
#[track_caller]
pub fn interpret_response(
    status: u16,
    body: &str,
    submitted_title: &str,
) -> StoryResult<CreationResult> {
    if !(200..300).contains(&status) {
        return Err(StoryError::from_status(status, body));
    }

    let parsed: WorkItemBody = serde_json::from_str(body)
        .map_err(|e| StoryError::response_format(format!("body is not a work item: {e}")))?;

    let Some(item_id) = parsed.id else {
        return Err(StoryError::response_format("missing integer 'id' field"));
    };

    let Some(item_url) = parsed
        .links
        .and_then(|links| links.html)
        .and_then(|html| html.href)
        .filter(|href| !href.trim().is_empty())
    else {
        return Err(StoryError::response_format("missing '_links.html.href' field"));
    };

    let title = parsed
        .fields
        .as_ref()
        .and_then(|fields| fields.get("System.Title"))
        .and_then(Value::as_str)
        .unwrap_or(submitted_title)
        .to_string();

    Ok(CreationResult {
        item_id,
        item_url,
        title,
    })
}
