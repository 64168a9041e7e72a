use serde::{Deserialize, Serialize};

use super::OpenAIConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System { content: String },
    User { content: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    query: &str,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![
            Message::System {
                content: config.system_prompt.clone(),
            },
            Message::User {
                content: query.to_owned(),
            },
        ],
        stream: false,
    }
}

/// Takes the text of the first choice, or an empty string if there is
/// none.
#[inline]
pub fn into_answer(completion: ChatCompletion) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::openai::OpenAIConfigBuilder;

    #[test]
    fn test_create_request() {
        let config = OpenAIConfigBuilder::with_api_key("xxx")
            .with_model("custom")
            .with_system_prompt("You are a student counselor.")
            .build();
        let request = serde_json::to_value(create_request("Hello", &config))
            .unwrap();
        assert_eq!(
            request,
            json!({
                "model": "custom",
                "messages": [
                    { "role": "system", "content": "You are a student counselor." },
                    { "role": "user", "content": "Hello" }
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_into_answer() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Ciao!" } }
            ]
        }))
        .unwrap();
        assert_eq!(into_answer(completion), "Ciao!");

        let empty: ChatCompletion =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(into_answer(empty), "");
    }
}
