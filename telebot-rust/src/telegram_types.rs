use serde::{Deserialize, Serialize};

use crate::TelebotErr;

/// Envelope every Bot API method answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, turning `"ok": false` into [`TelebotErr::ApiError`].
    pub fn into_result(self) -> Result<T, TelebotErr> {
        if !self.ok {
            let description = self
                .description
                .unwrap_or_else(|| "request was not successful".to_string());
            return Err(TelebotErr::ApiError(self.error_code, description));
        }

        self.result.ok_or_else(|| {
            TelebotErr::ApiError(
                self.error_code,
                "response was ok but had no result".to_string(),
            )
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String, // private, group, supergroup or channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64, // unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
}

pub type GetMeResponse = ApiResponse<User>;
pub type GetUpdatesResponse = ApiResponse<Vec<Update>>;
pub type SendMessageResponse = ApiResponse<Message>;
pub type GetChatResponse = ApiResponse<Chat>;
pub type BoolResponse = ApiResponse<bool>;
