//! Dialogflow v2 REST types.
//!
//! Only the fields the bot consumes are modeled; everything else in
//! the provider payload is ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentRequest {
    pub query_input: QueryInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInput {
    pub text: TextInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    pub text: String,
    pub language_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentResponse {
    pub response_id: Option<String>,
    pub query_result: Option<QueryResult>,
}

/// The NLU verdict for one piece of text. Read-only input for intent
/// dispatch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryResult {
    pub query_text: Option<String>,
    pub parameters: Option<Value>,
    pub all_required_params_present: bool,
    pub fulfillment_text: Option<String>,
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Intent {
    /// Fully-qualified name, `projects/<project>/agent/intents/<id>`.
    pub name: String,
    pub display_name: String,
}

impl QueryResult {
    /// Read a string-valued parameter by name.
    pub fn string_param(&self, name: &str) -> Option<&str> {
        self.parameters.as_ref()?.get(name)?.as_str()
    }
}
