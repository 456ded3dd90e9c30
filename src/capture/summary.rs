// 请求体摘要
// 只保留关键字段，避免把完整 prompt / token 打到控制台

use serde::Serialize;
use serde_json::Value;

/// 摘要提取失败
/// 只有这两种失败会走占位输出，其余错误不在此吸收
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("请求体不是合法 JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("JSON 顶层不是对象")]
    NotAnObject,
}

/// 脱敏后的请求体摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySummary {
    /// 顶层 model 字段原值，缺失为 null
    pub model: Value,
    /// contents 数组长度，缺失或非数组为 0
    pub contents_count: usize,
    /// tools 是否存在且非空
    pub tools: bool,
    /// generationConfig 原值，缺失为 null
    #[serde(rename = "generationConfig")]
    pub generation_config: Value,
    /// safetySettings 是否存在且非空
    #[serde(rename = "safetySettings")]
    pub safety_settings: bool,
    /// 全部顶层键名，保持文档顺序
    #[serde(rename = "_raw_keys")]
    pub raw_keys: Vec<String>,
}

/// 解析请求体并提取摘要
pub fn summarize_body(content: &[u8]) -> Result<BodySummary, SummaryError> {
    let body: Value = serde_json::from_slice(content)?;
    let map = body.as_object().ok_or(SummaryError::NotAnObject)?;

    Ok(BodySummary {
        model: map.get("model").cloned().unwrap_or(Value::Null),
        contents_count: map
            .get("contents")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0),
        tools: is_truthy(map.get("tools")),
        generation_config: map.get("generationConfig").cloned().unwrap_or(Value::Null),
        safety_settings: is_truthy(map.get("safetySettings")),
        raw_keys: map.keys().cloned().collect(),
    })
}

/// 空值（null / false / 0 / "" / [] / {}）视为未设置
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_body() {
        let body = br#"{"model":"x","contents":[1,2,3]}"#;
        let summary = summarize_body(body).unwrap();

        assert_eq!(summary.model, json!("x"));
        assert_eq!(summary.contents_count, 3);
        assert!(!summary.tools);
        assert_eq!(summary.generation_config, Value::Null);
        assert!(!summary.safety_settings);
        assert_eq!(summary.raw_keys, vec!["model", "contents"]);
    }

    #[test]
    fn test_full_body() {
        let body = json!({
            "model": "gemini-2.5-pro",
            "contents": [{"role": "user", "parts": [{"text": "Hi"}]}],
            "tools": [{"googleSearch": {}}],
            "generationConfig": {"maxOutputTokens": 65535},
            "safetySettings": [{"category": "HARM_CATEGORY_HARASSMENT"}]
        });
        let summary = summarize_body(&serde_json::to_vec(&body).unwrap()).unwrap();

        assert_eq!(summary.model, json!("gemini-2.5-pro"));
        assert_eq!(summary.contents_count, 1);
        assert!(summary.tools);
        assert_eq!(summary.generation_config, json!({"maxOutputTokens": 65535}));
        assert!(summary.safety_settings);
        assert_eq!(
            summary.raw_keys,
            vec![
                "model",
                "contents",
                "tools",
                "generationConfig",
                "safetySettings"
            ]
        );
    }

    #[test]
    fn test_raw_keys_keep_document_order() {
        let body = br#"{"zeta":1,"alpha":2,"model":"m"}"#;
        let summary = summarize_body(body).unwrap();
        assert_eq!(summary.raw_keys, vec!["zeta", "alpha", "model"]);
    }

    #[test]
    fn test_empty_collections_are_falsy() {
        let body = br#"{"tools":[],"safetySettings":{},"contents":[]}"#;
        let summary = summarize_body(body).unwrap();

        assert!(!summary.tools);
        assert!(!summary.safety_settings);
        assert_eq!(summary.contents_count, 0);
    }

    #[test]
    fn test_non_array_contents_counts_zero() {
        let body = br#"{"contents":"not-a-list"}"#;
        let summary = summarize_body(body).unwrap();
        assert_eq!(summary.contents_count, 0);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = summarize_body(b"\x00\x01\x02").unwrap_err();
        assert!(matches!(err, SummaryError::InvalidJson(_)));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = summarize_body(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, SummaryError::NotAnObject));
    }

    #[test]
    fn test_serialized_field_names() {
        let summary = summarize_body(br#"{"model":"x","contents":[1,2,3]}"#).unwrap();
        let rendered = serde_json::to_string_pretty(&summary).unwrap();

        assert!(rendered.contains("\"model\": \"x\""));
        assert!(rendered.contains("\"contents_count\": 3"));
        assert!(rendered.contains("\"tools\": false"));
        assert!(rendered.contains("\"generationConfig\": null"));
        assert!(rendered.contains("\"safetySettings\": false"));
        assert!(rendered.contains("\"_raw_keys\""));
    }
}
