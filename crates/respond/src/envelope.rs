//! # レスポンスエンベロープ
//!
//! 成功時の `{ "data": T, "flash": {...} }` と、
//! エラー時の `{ "code", "message", "description"?, "info_url"? }` を提供する。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::RespondError, formatter::ErrorFormatter};

/// 成功レスポンスのエンベロープ
///
/// `flash` はレスポンダに積まれた補助データで、空でも `{}` として出力される。
///
/// ```
/// use respond::Envelope;
/// use serde_json::{Map, json};
///
/// let payload = json!({ "x": 1 });
/// let flash = Map::new();
/// let envelope = Envelope::new(&payload, &flash);
///
/// assert_eq!(
///     serde_json::to_value(&envelope).unwrap(),
///     json!({ "data": { "x": 1 }, "flash": {} })
/// );
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: ?Sized> {
    pub data:  &'a T,
    pub flash: &'a Map<String, Value>,
}

impl<'a, T: ?Sized + Serialize> Envelope<'a, T> {
    pub fn new(data: &'a T, flash: &'a Map<String, Value>) -> Self {
        Self { data, flash }
    }

    /// JSON バイト列にエンコードする
    pub fn to_vec(&self) -> Result<Vec<u8>, RespondError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// エラーレスポンスのボディ
///
/// `description` と `info_url` は値がある場合にのみ出力する（`null` にはしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code:        i64,
    pub message:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_url:    Option<String>,
}

impl ErrorBody {
    /// [`ErrorFormatter`] からボディを組み立てる
    pub fn from_formatter(err: &(impl ErrorFormatter + ?Sized)) -> Self {
        Self {
            code:        err.code(),
            message:     err.to_string(),
            description: err.detail(),
            info_url:    err.info_url(),
        }
    }
}
