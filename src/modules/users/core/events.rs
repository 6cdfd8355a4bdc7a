use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEventType {
    #[serde(rename = "create:user")]
    CreateUser,
}

/// Audit trail entry. An unattributed event carries no `originator_user_id`
/// key at all rather than a null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(rename = "type")]
    pub event_type: AuditEventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_user_id: Option<String>,
    pub originator_ip: String,
    pub metadata: Json,
}

#[cfg(test)]
mod audit_event_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_serialize_an_attributed_event() {
        let event = AuditEvent {
            event_type: AuditEventType::CreateUser,
            originator_user_id: Some("user-123".into()),
            originator_ip: "127.0.0.1".into(),
            metadata: json!({ "id": "new-456" }),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "create:user",
                "originator_user_id": "user-123",
                "originator_ip": "127.0.0.1",
                "metadata": { "id": "new-456" },
            })
        );
    }

    #[rstest]
    fn it_should_leave_out_the_originator_when_unattributed() {
        let event = AuditEvent {
            event_type: AuditEventType::CreateUser,
            originator_user_id: None,
            originator_ip: "127.0.0.1".into(),
            metadata: json!({ "id": null }),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("originator_user_id").is_none());

        let back: AuditEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back.originator_user_id, None);
    }
}
