//! # エラー分類
//!
//! ドメインエラーが [`ErrorFormatter`] を実装すると、`error()` が宣言された
//! ステータスへ振り分け、構造化された JSON ボディを出力する。
//! 実装しないエラーは [`Failure::plain`] で渡し、その文字列表現がボディになる。
//!
//! ## 使用例
//!
//! ```
//! use http::StatusCode;
//! use respond::{ErrorFormatter, Failure};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("resource not found")]
//! struct NotFound;
//!
//! impl ErrorFormatter for NotFound {
//!     fn status(&self) -> StatusCode {
//!         StatusCode::NOT_FOUND
//!     }
//!
//!     fn code(&self) -> i64 {
//!         5
//!     }
//! }
//!
//! let failure = Failure::from(&NotFound);
//! assert_eq!(failure.status(), Some(StatusCode::NOT_FOUND));
//! ```

use std::fmt;

use http::StatusCode;

use crate::envelope::ErrorBody;

/// エラー分類トレイト
///
/// 必須は [`code`](ErrorFormatter::code) のみ。メッセージは `Display` の出力を使う。
/// 残りはデフォルト実装を持ち、必要なものだけ上書きする。
pub trait ErrorFormatter: std::error::Error {
    /// HTTP ステータスコード（デフォルト: 500）
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// エラー種別を表すアプリケーション固有のコード
    fn code(&self) -> i64;

    /// 長い説明（不足しているパラメータや許容値など）
    ///
    /// エラーボディの `description` として出力する。
    fn detail(&self) -> Option<String> {
        None
    }

    /// エラーについてのドキュメント URL
    fn info_url(&self) -> Option<String> {
        None
    }
}

/// 終端メソッドに渡すエラー
///
/// - `Absent`: エラーなし。ボディを書かない
/// - `Formatted`: 分類済みエラー。JSON ボディになる
/// - `Plain`: 分類なしのエラー。文字列表現がそのままボディになる
#[derive(Clone, Copy)]
pub enum Failure<'a> {
    Absent,
    Formatted(&'a dyn ErrorFormatter),
    Plain(&'a dyn fmt::Display),
}

impl<'a> Failure<'a> {
    /// 分類済みエラーをトレイトオブジェクトのまま渡す
    pub fn formatted(err: &'a dyn ErrorFormatter) -> Self {
        Self::Formatted(err)
    }

    /// 分類なしのエラーを渡す
    pub fn plain(err: &'a dyn fmt::Display) -> Self {
        Self::Plain(err)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// 分類済みエラーが宣言するステータス
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Formatted(err) => Some(err.status()),
            Self::Absent | Self::Plain(_) => None,
        }
    }

    /// エラーの文字列表現（`Absent` は `None`）
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Formatted(err) => Some(err.to_string()),
            Self::Plain(err) => Some(err.to_string()),
        }
    }

    /// 4xx 系レスポンスのボディ
    ///
    /// 分類済みエラーは JSON、分類なしは生の文字列。
    /// JSON エンコードに失敗した場合はエンコーダのメッセージをボディにする。
    pub(crate) fn to_body(self) -> Option<Vec<u8>> {
        match self {
            Self::Absent => None,
            Self::Formatted(err) => {
                let body = ErrorBody::from_formatter(err);
                match serde_json::to_vec(&body) {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        tracing::warn!(error.message = %e, "エラーボディの JSON エンコードに失敗しました");
                        Some(e.to_string().into_bytes())
                    }
                }
            }
            Self::Plain(err) => Some(err.to_string().into_bytes()),
        }
    }
}

impl<'a, E: ErrorFormatter> From<&'a E> for Failure<'a> {
    fn from(err: &'a E) -> Self {
        Self::Formatted(err)
    }
}

impl<'a, E: ErrorFormatter> From<Option<&'a E>> for Failure<'a> {
    fn from(err: Option<&'a E>) -> Self {
        match err {
            Some(err) => Self::Formatted(err),
            None => Self::Absent,
        }
    }
}

impl fmt::Debug for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Formatted(err) => f.debug_tuple("Formatted").field(err).finish(),
            Self::Plain(err) => f.debug_tuple("Plain").field(&err.to_string()).finish(),
        }
    }
}
