use serde_json::json;

use glados_domain::notification::NotificationMessage;

impl super::PushPlusSender {
    /// Build the PushPlus `send` payload for the configured template
    pub(super) fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "token": self.token,
            "title": message.title,
            "content": self.template.render_content(&message.content),
            "template": self.template.as_str(),
        })
    }
}
