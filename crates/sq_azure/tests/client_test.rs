use httpmock::prelude::*;
use serde_json::json;
use sq_azure::{
    types::{
        request::{self, Message, RequestMessage},
        response::FinishReason,
        tool::{Tool, ToolChoice, ToolChoiceFunction, ToolFunction},
    },
    Client, Error,
};

fn sample_request() -> request::ChatCompletion {
    request::ChatCompletion {
        messages: vec![RequestMessage::User(Message::new("What is the weather?"))],
        tools: vec![Tool::Function {
            function: ToolFunction {
                name: "getResults".to_owned(),
                description: None,
                parameters: json!({"type": "object"}).as_object().unwrap().clone(),
            },
        }],
        tool_choice: Some(ToolChoice::Function {
            function: ToolChoiceFunction {
                name: "getResults".to_owned(),
            },
        }),
        ..Default::default()
    }
}

#[test_log::test(tokio::test)]
async fn chat_completion_returns_tool_call() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/openai/deployments/gpt-test/chat/completions")
                .query_param("api-version", "2024-06-01")
                .header("api-key", "secret")
                .json_body_partial(
                    json!({
                        "tool_choice": {
                            "type": "function",
                            "function": {"name": "getResults"},
                        },
                    })
                    .to_string(),
                );
            then.status(200).json_body(json!({
                "id": "chatcmpl-1",
                "created": 1_700_000_000,
                "model": "gpt-test",
                "choices": [{
                    "index": 0,
                    "finish_reason": "tool_calls",
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "type": "function",
                            "id": "call-1",
                            "function": {
                                "name": "getResults",
                                "arguments": "{\"answer\":\"sunny\"}",
                            },
                        }],
                    },
                }],
                "usage": {
                    "prompt_tokens": 12,
                    "completion_tokens": 5,
                    "total_tokens": 17,
                },
            }));
        })
        .await;

    let response = Client::new("secret".to_owned(), server.base_url())
        .chat_completion("gpt-test", &sample_request())
        .await
        .unwrap();

    mock.assert_async().await;

    let choice = &response.choices[0];
    assert_eq!(choice.finish_reason, Some(FinishReason::ToolCalls));

    let call = &choice.message.tool_calls[0];
    assert_eq!(call.name(), "getResults");
    assert_eq!(call.arguments(), "{\"answer\":\"sunny\"}");
}

#[test_log::test(tokio::test)]
async fn chat_completion_surfaces_error_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/openai/deployments/gpt-test/chat/completions");
            then.status(429).json_body(json!({
                "error": {
                    "code": "429",
                    "message": "Requests to the deployment have exceeded the rate limit.",
                },
            }));
        })
        .await;

    let error = Client::new("secret".to_owned(), server.base_url())
        .chat_completion("gpt-test", &sample_request())
        .await
        .unwrap_err();

    match error {
        Error::Api { code, message } => {
            assert_eq!(code, 429);
            assert_eq!(
                message,
                "Requests to the deployment have exceeded the rate limit."
            );
        }
        other => panic!("expected API error, got: {other:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn chat_completion_keeps_unparsable_error_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/openai/deployments/gpt-test/chat/completions");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let error = Client::new("secret".to_owned(), server.base_url())
        .chat_completion("gpt-test", &sample_request())
        .await
        .unwrap_err();

    match error {
        Error::Api { code, message } => {
            assert_eq!(code, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected API error, got: {other:?}"),
    }
}
