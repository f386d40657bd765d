//! Realtime channel frames.
//!
//! The server pushes `{"event": "...", "data": ...}` frames. The console
//! only reacts to a fixed set of events by refreshing the affected list and
//! raising a notification; payloads carry no contract beyond "something
//! changed".

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeFrame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealtimeEvent {
    CustomerRegistered,
    OrderRequested,
    InquiryCreated,
    NewsletterSubscribed,
    StaffStatusUpdated,
}

impl RealtimeEvent {
    pub const ALL: [RealtimeEvent; 5] = [
        RealtimeEvent::CustomerRegistered,
        RealtimeEvent::OrderRequested,
        RealtimeEvent::InquiryCreated,
        RealtimeEvent::NewsletterSubscribed,
        RealtimeEvent::StaffStatusUpdated,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            RealtimeEvent::CustomerRegistered => "register-customer",
            RealtimeEvent::OrderRequested => "create-order-request",
            // spelled this way by the server
            RealtimeEvent::InquiryCreated => "create-inquery",
            RealtimeEvent::NewsletterSubscribed => "subscribe-newsletter",
            RealtimeEvent::StaffStatusUpdated => "staff-status-updated",
        }
    }

    /// Resource path whose list should be refreshed.
    pub fn resource(&self) -> &'static str {
        match self {
            RealtimeEvent::CustomerRegistered => "customer",
            RealtimeEvent::OrderRequested => "order",
            RealtimeEvent::InquiryCreated => "inquiry",
            RealtimeEvent::NewsletterSubscribed => "newsletter",
            RealtimeEvent::StaffStatusUpdated => "staff",
        }
    }

    /// Toast text; staff presence changes are silent.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RealtimeEvent::CustomerRegistered => Some("A new customer has registered"),
            RealtimeEvent::OrderRequested => Some("New order received"),
            RealtimeEvent::InquiryCreated => Some("New inquiry received"),
            RealtimeEvent::NewsletterSubscribed => Some("New newsletter subscriber"),
            RealtimeEvent::StaffStatusUpdated => None,
        }
    }
}

/// Parses an incoming text frame. Unknown events and malformed frames give
/// `None`.
pub fn parse_frame(text: &str) -> Option<(RealtimeEvent, Value)> {
    let frame: RealtimeFrame = serde_json::from_str(text).ok()?;
    let event = RealtimeEvent::from_name(&frame.event)?;
    Some((event, frame.data))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingEvent {
    LoginStaff { staff_id: String },
    LogoutStaff { staff_id: String },
}

impl OutgoingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OutgoingEvent::LoginStaff { .. } => "login-staff",
            OutgoingEvent::LogoutStaff { .. } => "logout-staff",
        }
    }

    pub fn to_frame(&self) -> String {
        let staff_id = match self {
            OutgoingEvent::LoginStaff { staff_id } | OutgoingEvent::LogoutStaff { staff_id } => {
                staff_id
            }
        };
        let frame = RealtimeFrame {
            event: self.name().to_string(),
            data: serde_json::json!({ "staffId": staff_id }),
        };
        serde_json::to_string(&frame).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_events_parse() {
        let (event, data) =
            parse_frame(r#"{"event":"create-order-request","data":{"orderId":"o-1"}}"#).unwrap();
        assert_eq!(event, RealtimeEvent::OrderRequested);
        assert_eq!(data["orderId"], "o-1");
        assert_eq!(event.resource(), "order");
    }

    #[test]
    fn every_event_name_round_trips_through_lookup() {
        for event in RealtimeEvent::ALL {
            assert_eq!(RealtimeEvent::from_name(event.name()), Some(event));
        }
    }

    #[test]
    fn unknown_or_broken_frames_are_ignored() {
        assert!(parse_frame(r#"{"event":"something-else"}"#).is_none());
        assert!(parse_frame("not json").is_none());
    }

    #[test]
    fn outgoing_frame_carries_staff_id() {
        let text = OutgoingEvent::LogoutStaff {
            staff_id: "s-9".into(),
        }
        .to_frame();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["event"], "logout-staff");
        assert_eq!(value["data"]["staffId"], "s-9");
    }
}
