//! # デモサーバーのエラー定義
//!
//! ウィジェット API で発生するエラーと、その分類（ステータス・コード）を定義する。
//!
//! | エラー種別 | HTTP ステータス | コード |
//! |-----------|----------------|--------|
//! | `MalformedPayload` | 400 Bad Request | 1 |
//! | `NotFound` | 404 Not Found | 2 |
//! | `Validation` | 422 Unprocessable Entity | 3 |
//! | `Conflict` | 409 Conflict | 4 |

use axum::http::StatusCode;
use respond::ErrorFormatter;
use thiserror::Error;

/// エラードキュメントのベース URL
const ERROR_DOCS_BASE: &str = "https://respond.example.com/errors";

/// ウィジェット API のエラー
#[derive(Debug, Error)]
pub enum WidgetError {
    /// リクエストボディを JSON として解釈できない
    #[error("リクエストボディが不正です")]
    MalformedPayload(#[from] serde_json::Error),

    /// ウィジェットが存在しない
    #[error("ウィジェットが見つかりません: {0}")]
    NotFound(u64),

    /// 入力値がルールに違反している
    #[error("入力値が不正です")]
    Validation(String),

    /// 同名のウィジェットが既に存在する
    #[error("同名のウィジェットが既に存在します: {0}")]
    Conflict(String),
}

impl ErrorFormatter for WidgetError {
    fn status(&self) -> StatusCode {
        match self {
            WidgetError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            WidgetError::NotFound(_) => StatusCode::NOT_FOUND,
            WidgetError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WidgetError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn code(&self) -> i64 {
        match self {
            WidgetError::MalformedPayload(_) => 1,
            WidgetError::NotFound(_) => 2,
            WidgetError::Validation(_) => 3,
            WidgetError::Conflict(_) => 4,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            WidgetError::MalformedPayload(e) => Some(e.to_string()),
            WidgetError::Validation(detail) => Some(detail.clone()),
            WidgetError::NotFound(_) | WidgetError::Conflict(_) => None,
        }
    }

    fn info_url(&self) -> Option<String> {
        Some(format!("{ERROR_DOCS_BASE}/{}", self.code()))
    }
}
