//! Click-target selection for an event.

use serde_json::Value;

use super::record::EventRecord;

/// Candidate fields, highest priority first.
pub const URL_FIELDS: [&str; 5] = [
    "payload.cn",
    "payload.alias",
    "payload.url",
    "payload.domain",
    "payload.deploymentUrl",
];

/// First present, non-empty string among [`URL_FIELDS`].
///
/// An empty string at a higher-priority field falls through to the next candidate.
/// Non-string values never count as a URL.
pub fn resolve_url(record: &EventRecord) -> Option<String> {
    URL_FIELDS
        .iter()
        .find_map(|path| match record.get(path) {
            Some(Value::String(url)) if !url.is_empty() => Some(url.clone()),
            _ => None,
        })
}

/// The address handed to the host when a resolved item is activated.
pub fn external_url(resolved: &str) -> String {
    format!("https://{}", resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(payload: Value) -> EventRecord {
        serde_json::from_value(json!({"type": "deployment", "payload": payload})).unwrap()
    }

    #[test]
    fn test_no_url_fields_resolves_to_none() {
        assert_eq!(resolve_url(&record(json!({}))), None);
        assert_eq!(resolve_url(&record(json!({"name": "my-app"}))), None);
        assert_eq!(resolve_url(&record(Value::Null)), None);
    }

    #[test]
    fn test_cn_wins_over_everything() {
        let r = record(json!({
            "deploymentUrl": "my-app-abc.now.sh",
            "domain": "example.com",
            "url": "u.now.sh",
            "alias": "a.now.sh",
            "cn": "cert.example.com"
        }));
        assert_eq!(resolve_url(&r).as_deref(), Some("cert.example.com"));
    }

    #[test]
    fn test_empty_string_falls_through() {
        let r = record(json!({"cn": "", "alias": "a.now.sh"}));
        assert_eq!(resolve_url(&r).as_deref(), Some("a.now.sh"));

        let r = record(json!({"cn": "", "alias": "", "url": "", "domain": "", "deploymentUrl": "d.now.sh"}));
        assert_eq!(resolve_url(&r).as_deref(), Some("d.now.sh"));

        let r = record(json!({"cn": "", "alias": ""}));
        assert_eq!(resolve_url(&r), None);
    }

    #[test]
    fn test_priority_order_between_lower_fields() {
        let r = record(json!({"deploymentUrl": "d.now.sh", "domain": "example.com"}));
        assert_eq!(resolve_url(&r).as_deref(), Some("example.com"));

        let r = record(json!({"deploymentUrl": "d.now.sh", "url": "u.now.sh"}));
        assert_eq!(resolve_url(&r).as_deref(), Some("u.now.sh"));
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let r = record(json!({"cn": null, "alias": 42, "url": {"href": "x"}, "domain": "example.com"}));
        assert_eq!(resolve_url(&r).as_deref(), Some("example.com"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let r = record(json!({"alias": "a.now.sh", "domain": "example.com"}));
        assert_eq!(resolve_url(&r), resolve_url(&r));
    }

    #[test]
    fn test_external_url_prefix() {
        assert_eq!(external_url("a.now.sh"), "https://a.now.sh");
    }
}
