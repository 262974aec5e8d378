//! # インメモリのレスポンス出力先
//!
//! [`ResponseSink`] をメモリ上に記録する実装。ハンドラ内で組み立てたレスポンスを
//! `http::Response` や axum の `Response` に変換して返すために使う。

use std::io;

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::sink::ResponseSink;

/// 書き込まれたステータス・ヘッダー・ボディを保持する出力先
///
/// - ステータスは最初の書き込みだけが有効（以降は警告ログを出して無視する）
/// - ステータス未設定のままボディを書くと 200 を書いたものとみなす
/// - ボディは追記される
#[derive(Debug, Clone, Default)]
pub struct ResponseRecorder {
    status:  Option<StatusCode>,
    headers: HeaderMap,
    body:    BytesMut,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込まれたステータス（未設定なら 200）
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// ステータスが書き込み済みかどうか
    pub fn wrote_status(&self) -> bool {
        self.status.is_some()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// ヘッダー値を文字列で取得する
    ///
    /// 値が可視 ASCII 以外のバイト（UTF-8 のファイル名など）を含む場合は、
    /// 設定済みでも `None` を返す。その場合は [`header_bytes`](Self::header_bytes) を使う。
    pub fn header(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// ヘッダー値をバイト列のまま取得する
    pub fn header_bytes(&self, name: impl http::header::AsHeaderName) -> Option<&[u8]> {
        self.headers.get(name).map(HeaderValue::as_bytes)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// ボディを UTF-8 文字列として取得する
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// ボディを JSON として解釈する（JSON でなければ `None`）
    pub fn body_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// `http::Response` に変換する
    pub fn into_http_response(self) -> http::Response<Bytes> {
        let status = self.status();
        let mut response = http::Response::new(self.body.freeze());
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseSink for ResponseRecorder {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if let Some(current) = self.status {
            tracing::warn!(
                http.status_code = current.as_u16(),
                http.ignored_status_code = status.as_u16(),
                "ステータスは書き込み済みのため無視します"
            );
            return;
        }
        self.status = Some(status);
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ResponseRecorder {
    fn into_response(self) -> axum::response::Response {
        self.into_http_response().map(axum::body::Body::from)
    }
}
