//! # Content-Type とボディ省略ルール
//!
//! レスポンスで使う Content-Type の定数と、ボディを書かないステータスの集合を定義する。

use http::{HeaderName, StatusCode};

/// JSON レスポンス（既定）
pub const APPLICATION_JSON: &str = "application/json";
/// PDF ダウンロード
pub const APPLICATION_PDF: &str = "application/pdf";
/// プレーンテキストのダウンロード
pub const APPLICATION_PLAIN: &str = "application/plain";
/// スプレッドシート等のバイナリダウンロード
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// `Content-Description` ヘッダー（`http` クレートに定数がない）
pub const CONTENT_DESCRIPTION: HeaderName = HeaderName::from_static("content-description");

/// ボディを書かないステータスコード
///
/// 201 / 204 / 205 は、ペイロードが渡されてもボディを出力しない。
pub const EMPTY_STATUS: [StatusCode; 3] = [
    StatusCode::CREATED,
    StatusCode::NO_CONTENT,
    StatusCode::RESET_CONTENT,
];

/// ボディ出力が不要なステータスかどうか
pub fn does_not_require_content(status: StatusCode) -> bool {
    EMPTY_STATUS.contains(&status)
}
