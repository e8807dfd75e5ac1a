//! Notification request and delivery receipt.

use serde::{Deserialize, Serialize};

use crate::constants::NOTIFICATION_STATUS_SENT;

/// Notification to deliver over a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Notification {
    /// Delivery channel (e.g. email, sms)
    #[cfg_attr(feature = "openapi", schema(example = "email"))]
    pub channel: String,
    /// Channel-specific recipient address
    #[cfg_attr(feature = "openapi", schema(example = "johndoe@example.com"))]
    pub recipient: String,
    /// Message body
    #[cfg_attr(feature = "openapi", schema(example = "Your transfer has completed"))]
    pub message: String,
}

/// Receipt returned once a notification has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotificationReceipt {
    pub status: String,
    pub channel: String,
    pub recipient: String,
    pub message: String,
}

impl NotificationReceipt {
    /// Build a receipt reporting the notification as sent.
    pub fn sent(notification: Notification) -> Self {
        Self {
            status: NOTIFICATION_STATUS_SENT.to_string(),
            channel: notification.channel,
            recipient: notification.recipient,
            message: notification.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_receipt_echoes_notification() {
        let receipt = NotificationReceipt::sent(Notification {
            channel: "sms".to_string(),
            recipient: "+15550100".to_string(),
            message: "hello".to_string(),
        });

        assert_eq!(receipt.status, "SENT");
        assert_eq!(receipt.channel, "sms");
        assert_eq!(receipt.recipient, "+15550100");
        assert_eq!(receipt.message, "hello");
    }
}
