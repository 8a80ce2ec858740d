//! Event records as supplied by the host, plus the identity context passed to renderers.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One feed entry describing something that happened.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<String>,

    /// Discriminant selecting the renderer
    #[serde(rename = "type")]
    pub event_type: String,

    /// `None` when the host sent no timestamp or one we could not parse
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created: Option<DateTime<Utc>>,

    /// Type-specific fields. Kept as raw JSON; only the fields renderers read matter.
    #[serde(default)]
    pub payload: Value,

    #[serde(default)]
    pub user: Option<Actor>,

    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

/// The user who caused an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// The signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// The team whose feed is shown. Absent in a personal context.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Team {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.slug)
    }
}

impl EventRecord {
    /// Look up a dotted path such as `payload.cn`.
    ///
    /// Missing intermediate levels, or intermediates that are not objects, yield `None`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let root = match segments.next()? {
            "payload" => &self.payload,
            _ => return None,
        };
        segments.try_fold(root, |value, key| value.as_object()?.get(key))
    }

    /// String field inside the payload (`key` may itself be dotted).
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.payload, |value, k| value.as_object()?.get(k))?
            .as_str()
    }

    pub fn actor_uid(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.uid.as_deref())
            .or(self.user_id.as_deref())
    }

    pub fn actor_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }
}

/// Accepts RFC 3339 text or integer epoch milliseconds. Anything else becomes `None`
/// instead of failing the whole record.
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(parse_timestamp(&raw))
}

pub fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => Utc.timestamp_millis_opt(n.as_i64()?).single(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> EventRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_created_accepts_rfc3339_and_millis() {
        let a = record(json!({"type": "login", "created": "2026-10-16T12:00:00Z"}));
        let b = record(json!({"type": "login", "created": 1_792_152_000_000i64}));
        assert_eq!(
            a.created,
            Some(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap())
        );
        assert_eq!(
            b.created,
            Some(Utc.timestamp_millis_opt(1_792_152_000_000).unwrap())
        );
    }

    #[test]
    fn test_malformed_created_is_absent_not_an_error() {
        let r = record(json!({"type": "login", "created": "yesterday-ish"}));
        assert!(r.created.is_none());

        let r = record(json!({"type": "login", "created": {"nested": true}}));
        assert!(r.created.is_none());

        let r = record(json!({"type": "login"}));
        assert!(r.created.is_none());
    }

    #[test]
    fn test_dotted_lookup_tolerates_missing_levels() {
        let r = record(json!({
            "type": "alias",
            "payload": {"alias": "x.now.sh", "meta": {"region": "sfo1"}, "flat": 3}
        }));
        assert_eq!(r.get("payload.alias"), Some(&json!("x.now.sh")));
        assert_eq!(r.get("payload.meta.region"), Some(&json!("sfo1")));
        assert_eq!(r.get("payload.missing.deeper"), None);
        assert_eq!(r.get("payload.flat.deeper"), None);
        assert_eq!(r.get("other.alias"), None);
        assert_eq!(r.payload_str("meta.region"), Some("sfo1"));
        assert_eq!(r.payload_str("flat"), None);
    }

    #[test]
    fn test_non_object_payload_is_tolerated() {
        let r = record(json!({"type": "login", "payload": null}));
        assert_eq!(r.get("payload.cn"), None);
        let r = record(json!({"type": "login", "payload": [1, 2]}));
        assert_eq!(r.get("payload.cn"), None);
    }

    #[test]
    fn test_actor_uid_falls_back_to_user_id() {
        let r = record(json!({"type": "login", "userId": "u2"}));
        assert_eq!(r.actor_uid(), Some("u2"));
        let r = record(json!({"type": "login", "userId": "u2", "user": {"uid": "u1", "username": "leo"}}));
        assert_eq!(r.actor_uid(), Some("u1"));
        assert_eq!(r.actor_name(), Some("leo"));
    }
}
