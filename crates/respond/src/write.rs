//! # 関数版 API
//!
//! flash を持たず、出力先に直接書き込むヘルパー関数。
//! [`ok`] はエンベロープで包まず、ペイロードをそのまま JSON にする。
//!
//! ```
//! use http::StatusCode;
//! use respond::{ResponseRecorder, write};
//!
//! let mut recorder = ResponseRecorder::new();
//! write::ok(&mut recorder, &serde_json::json!({ "x": 1 }));
//!
//! assert_eq!(recorder.status(), StatusCode::OK);
//! assert_eq!(recorder.body_text(), Some(r#"{"x":1}"#));
//! ```

use http::StatusCode;
use serde::Serialize;

use crate::{formatter::Failure, response::HttpResponse, sink::ResponseSink};

fn response<S: ResponseSink>(sink: &mut S) -> HttpResponse<&mut S> {
    HttpResponse::new(sink)
}

/// 200 OK（ペイロードをそのまま返す）
pub fn ok<S: ResponseSink, T: Serialize + ?Sized>(sink: &mut S, payload: &T) {
    response(sink).json(StatusCode::OK, payload);
}

/// 204 No Content
pub fn no_content<S: ResponseSink>(sink: &mut S) {
    response(sink).no_content();
}

/// 201 Created
pub fn created<S: ResponseSink>(sink: &mut S, location: &str) {
    response(sink).created_at(location);
}

/// 404 Not Found
pub fn not_found<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).not_found(err);
}

/// 401 Unauthorized
pub fn unauthorized<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).unauthorized(err);
}

/// 403 Forbidden
pub fn forbidden<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).forbidden(err);
}

/// 400 Bad Request
pub fn bad_request<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).bad_request(err);
}

/// 422 Unprocessable Entity
pub fn unprocessable_entity<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).unprocessable_entity(err);
}

/// 409 Conflict
pub fn conflict<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).conflict(err);
}

/// 500 Internal Server Error
pub fn internal_server_error<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).internal_server_error(err);
}

/// エラーの分類に従ってレスポンスを返す
pub fn error<'a, S: ResponseSink>(sink: &mut S, err: impl Into<Failure<'a>>) {
    response(sink).error(err);
}

/// プレーンテキストファイル
pub fn plain<S: ResponseSink>(sink: &mut S, stream: &[u8], file_name: &str) {
    response(sink).plain(stream, file_name);
}

/// PDF ファイル
pub fn pdf<S: ResponseSink>(sink: &mut S, stream: &[u8]) {
    response(sink).pdf(stream);
}

/// スプレッドシート
pub fn excel<S: ResponseSink>(sink: &mut S, stream: &[u8]) {
    response(sink).excel(stream);
}
