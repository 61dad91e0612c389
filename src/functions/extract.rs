//! Pulling a JSON function call out of free-form model output

use serde_json::Value;

use super::FunctionCall;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Find the first JSON object in `text`
///
/// A fenced ```` ```json ```` block wins when it parses; otherwise the span
/// from the first `{` to the last `}` is tried.
pub fn extract_json(text: &str) -> Option<Value> {
    if let Some(block) = fenced_block(text) {
        if let Ok(value) = serde_json::from_str(block) {
            return Some(value);
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Extract a function call, or `None` when the text holds no call
///
/// An empty object, or one whose `function` field is missing or blank, means
/// the model decided no function applies.
pub fn extract_function_call(text: &str) -> Option<FunctionCall> {
    let value = extract_json(text)?;
    let object = value.as_object()?;

    let function = object.get("function")?.as_str()?.trim();
    if function.is_empty() {
        return None;
    }

    let parameters = match object.get("parameters") {
        Some(Value::Null) | None => Value::Object(Default::default()),
        Some(other) => other.clone(),
    };

    Some(FunctionCall {
        function: function.to_string(),
        parameters,
    })
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &text[open..];
    let close = rest.find(FENCE_CLOSE)?;
    Some(rest[..close].trim())
}
