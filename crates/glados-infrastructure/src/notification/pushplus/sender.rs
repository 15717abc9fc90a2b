use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;

use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_domain::shared::DomainError;

use crate::http::OutgoingRequest;

// PushPlus answers {"code":200,...} on success
const PUSHPLUS_OK: i64 = 200;

#[async_trait]
impl NotificationSender for super::PushPlusSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let payload = self.build_payload(message);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let request = OutgoingRequest {
            method: Method::POST,
            url: self.endpoint.clone(),
            headers,
            body: Some(payload.to_string()),
            timeout: self.timeout,
        };

        let response = self.transport.execute(request).await.map_err(|e| {
            DomainError::Infrastructure(format!("Failed to send PushPlus notification: {:#}", e))
        })?;

        if !response.is_ok() {
            return Err(DomainError::Infrastructure(format!(
                "PushPlus failed with status {}: {}",
                response.status, response.body
            )));
        }

        let resp_body: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            DomainError::Deserialization(format!("Failed to parse PushPlus response: {}", e))
        })?;

        if let Some(code) = resp_body.get("code").and_then(|c| c.as_i64()) {
            if code != PUSHPLUS_OK {
                let msg = resp_body
                    .get("msg")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Unknown error");
                return Err(DomainError::Infrastructure(format!(
                    "PushPlus error code {}: {}",
                    code, msg
                )));
            }
        }

        Ok(())
    }
}
