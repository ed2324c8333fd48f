use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequestBody<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<&'a str>,
}

/// Successful response body. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ChatResponseBody {
    #[serde(default)]
    pub reply: Option<Value>,
}

impl ChatResponseBody {
    /// Text to show for `reply`.
    ///
    /// Falsy values (null, `false`, `0`, `""`) count as no reply. Other
    /// scalars are shown as written; arrays and objects as compact JSON.
    pub fn reply_text(&self) -> Option<String> {
        match self.reply.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            Value::Number(number) if number.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_user_type_when_unset() {
        let body = ChatRequestBody {
            message: "What is IPC 279?",
            user_type: None,
        };

        let json = serde_json::to_value(&body).expect("body must serialize");

        assert_eq!(json, serde_json::json!({ "message": "What is IPC 279?" }));
    }

    #[test]
    fn request_includes_user_type_when_set() {
        let body = ChatRequestBody {
            message: "hi",
            user_type: Some("advocate"),
        };

        let json = serde_json::to_value(&body).expect("body must serialize");

        assert_eq!(json["user_type"], "advocate");
    }

    #[test]
    fn response_tolerates_missing_and_null_reply() {
        let missing: ChatResponseBody =
            serde_json::from_str(r#"{"error": "boom"}"#).expect("must parse");
        let null: ChatResponseBody =
            serde_json::from_str(r#"{"reply": null}"#).expect("must parse");

        assert_eq!(missing.reply_text(), None);
        assert_eq!(null.reply_text(), None);
    }

    #[test]
    fn falsy_replies_count_as_missing() {
        for body in [
            r#"{"reply": ""}"#,
            r#"{"reply": false}"#,
            r#"{"reply": 0}"#,
        ] {
            let parsed: ChatResponseBody = serde_json::from_str(body).expect("must parse");
            assert_eq!(parsed.reply_text(), None, "{body}");
        }
    }

    #[test]
    fn non_string_replies_are_stringified() {
        let number: ChatResponseBody =
            serde_json::from_str(r#"{"reply": 42}"#).expect("must parse");
        let flag: ChatResponseBody =
            serde_json::from_str(r#"{"reply": true}"#).expect("must parse");
        let list: ChatResponseBody =
            serde_json::from_str(r#"{"reply": ["a", 1]}"#).expect("must parse");

        assert_eq!(number.reply_text(), Some("42".to_owned()));
        assert_eq!(flag.reply_text(), Some("true".to_owned()));
        assert_eq!(list.reply_text(), Some(r#"["a",1]"#.to_owned()));
    }
}
