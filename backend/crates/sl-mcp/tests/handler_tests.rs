mod common;

use common::{FakeCreator, handler_with};

use sl_mcp::{CREATE_STORY_TOOL, PROTOCOL_VERSION, SERVER_NAME, error_codes};

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::{Value, json};

async fn call(creator: Arc<FakeCreator>, message: Value) -> Value {
    let handler = handler_with(creator);
    let response = handler
        .handle_message(&message.to_string())
        .await
        .expect("request should produce a response");
    serde_json::to_value(response).unwrap()
}

fn tool_call(id: i64, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": CREATE_STORY_TOOL, "arguments": arguments}
    })
}

#[tokio::test]
async fn given_initialize_when_handled_then_server_info_and_tools_capability() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {"protocolVersion": PROTOCOL_VERSION, "capabilities": {}}
        }),
    )
    .await;

    assert_that!(response["id"], eq(&json!(1)));
    assert_that!(response["result"]["protocolVersion"], eq(&json!(PROTOCOL_VERSION)));
    assert_that!(response["result"]["serverInfo"]["name"], eq(&json!(SERVER_NAME)));
    assert!(response["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn given_notification_when_handled_then_no_response() {
    let handler = handler_with(Arc::new(FakeCreator::default()));

    let response = handler
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;

    assert!(response.is_none());
}

#[tokio::test]
async fn given_ping_when_handled_then_empty_result() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "2.0", "id": "p", "method": "ping"}),
    )
    .await;

    assert_that!(response["id"], eq(&json!("p")));
    assert_that!(response["result"], eq(&json!({})));
}

#[tokio::test]
async fn given_null_id_when_handled_then_answered_with_null_id() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "2.0", "id": null, "method": "ping"}),
    )
    .await;

    assert_that!(response["id"], eq(&Value::Null));
    assert_that!(response["result"], eq(&json!({})));
}

#[tokio::test]
async fn given_tools_list_when_handled_then_exactly_create_story() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    )
    .await;

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_that!(tools.len(), eq(1));
    assert_that!(tools[0]["name"], eq(&json!(CREATE_STORY_TOOL)));
}

#[tokio::test]
async fn given_valid_create_story_when_called_then_confirmation_text() {
    let creator = Arc::new(FakeCreator::default());

    let response = call(
        creator.clone(),
        tool_call(3, json!({"title": " Login ", "description": "Users sign in"})),
    )
    .await;

    let result = &response["result"];
    assert_that!(result["isError"], eq(&json!(false)));
    let text = result["content"][0]["text"].as_str().unwrap();
    assert_that!(text, contains_substring("#1"));
    assert_that!(text, contains_substring("_workitems/edit/1"));
    assert_that!(
        creator.calls(),
        eq(&vec![("Login".to_string(), "Users sign in".to_string())])
    );
}

#[tokio::test]
async fn given_missing_description_when_called_then_treated_as_empty() {
    let creator = Arc::new(FakeCreator::default());

    let response = call(creator.clone(), tool_call(4, json!({"title": "T"}))).await;

    assert_that!(response["result"]["isError"], eq(&json!(false)));
    assert_that!(creator.calls(), eq(&vec![("T".to_string(), String::new())]));
}

#[tokio::test]
async fn given_blank_title_when_called_then_tool_error_without_creation() {
    let creator = Arc::new(FakeCreator::default());

    let response = call(creator.clone(), tool_call(5, json!({"title": "   ", "description": "D"}))).await;

    assert!(response.get("error").is_none());
    assert_that!(response["result"]["isError"], eq(&json!(true)));
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert_that!(text, contains_substring("title required"));
    assert!(creator.calls().is_empty());
}

#[tokio::test]
async fn given_remote_rejection_when_called_then_tool_error_text() {
    let creator = Arc::new(FakeCreator::rejecting(401));

    let response = call(creator, tool_call(6, json!({"title": "T"}))).await;

    assert_that!(response["result"]["isError"], eq(&json!(true)));
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert_that!(text, contains_substring("Authentication failed"));
}

#[tokio::test]
async fn given_unknown_tool_when_called_then_invalid_params() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "delete_story", "arguments": {}}
        }),
    )
    .await;

    assert_that!(response["error"]["code"], eq(&json!(error_codes::INVALID_PARAMS)));
    assert_that!(
        response["error"]["message"].as_str().unwrap(),
        contains_substring("delete_story")
    );
}

#[tokio::test]
async fn given_tools_call_without_params_when_handled_then_invalid_params() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call"}),
    )
    .await;

    assert_that!(response["error"]["code"], eq(&json!(error_codes::INVALID_PARAMS)));
}

#[tokio::test]
async fn given_non_string_title_when_called_then_invalid_params() {
    let creator = Arc::new(FakeCreator::default());

    let response = call(creator.clone(), tool_call(9, json!({"title": 42}))).await;

    assert_that!(response["error"]["code"], eq(&json!(error_codes::INVALID_PARAMS)));
    assert!(creator.calls().is_empty());
}

#[tokio::test]
async fn given_unknown_method_when_handled_then_method_not_found() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "2.0", "id": 10, "method": "resources/list"}),
    )
    .await;

    assert_that!(response["id"], eq(&json!(10)));
    assert_that!(response["error"]["code"], eq(&json!(error_codes::METHOD_NOT_FOUND)));
}

#[tokio::test]
async fn given_malformed_json_when_handled_then_parse_error_with_null_id() {
    let handler = handler_with(Arc::new(FakeCreator::default()));

    let response = handler.handle_message("{not json").await.unwrap();
    let value = serde_json::to_value(response).unwrap();

    assert_that!(value["error"]["code"], eq(&json!(error_codes::PARSE_ERROR)));
    assert_that!(value["id"], eq(&Value::Null));
}

#[tokio::test]
async fn given_missing_method_when_handled_then_invalid_request_keeps_id() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "2.0", "id": 11}),
    )
    .await;

    assert_that!(response["id"], eq(&json!(11)));
    assert_that!(response["error"]["code"], eq(&json!(error_codes::INVALID_REQUEST)));
}

#[tokio::test]
async fn given_wrong_jsonrpc_version_when_handled_then_invalid_request() {
    let response = call(
        Arc::new(FakeCreator::default()),
        json!({"jsonrpc": "1.0", "id": 12, "method": "ping"}),
    )
    .await;

    assert_that!(response["error"]["code"], eq(&json!(error_codes::INVALID_REQUEST)));
}

#[tokio::test]
async fn given_two_identical_calls_when_handled_then_two_items_created() {
    let creator = Arc::new(FakeCreator::default());

    call(creator.clone(), tool_call(13, json!({"title": "Same"}))).await;
    call(creator.clone(), tool_call(14, json!({"title": "Same"}))).await;

    assert_that!(creator.calls().len(), eq(2));
}
