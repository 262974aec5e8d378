//! # レスポンス書き込みの本体
//!
//! [`HttpResponse`] は出力先と flash データを保持し、結果ごとの終端メソッドで
//! ヘッダー・ステータス・ボディを書き込む。
//!
//! ## ステータスとボディの対応
//!
//! | メソッド | ステータス | ボディ |
//! |---------|-----------|--------|
//! | `ok` | 200 | `{ "data": T, "flash": {...} }` |
//! | `no_content` | 204 | なし |
//! | `created` | 201 | なし（`Location` ヘッダーを設定） |
//! | `not_found` ほか 4xx | 各ステータス | エラーがあればエラーボディ |
//! | `internal_server_error` | 500 | エラーがあればエラーボディ |
//! | `error` | エラーの分類による | 同上 |
//! | `plain` / `pdf` / `excel` | 200 | ストリームそのまま |
//!
//! エラーボディは、分類済みエラーなら JSON、分類なしなら文字列表現そのもの。
//!
//! 終端メソッドの二重呼び出しは検出しない（出力先の扱いに従う）。
//! 1 回に制限したい場合は [`Responder`](crate::Responder) を使う。

use std::fmt;

use http::{HeaderValue, StatusCode, header, request::Parts};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    content::{
        APPLICATION_JSON,
        APPLICATION_OCTET_STREAM,
        APPLICATION_PDF,
        APPLICATION_PLAIN,
        CONTENT_DESCRIPTION,
        does_not_require_content,
    },
    envelope::Envelope,
    error::RespondError,
    formatter::{ErrorFormatter, Failure},
    location::build_location_url,
    sink::ResponseSink,
};

/// 出力先と flash データを保持するレスポンス
#[derive(Debug)]
pub struct HttpResponse<S> {
    sink:  S,
    flash: Map<String, Value>,
}

impl<S: ResponseSink> HttpResponse<S> {
    pub fn new(sink: S) -> Self {
        Self::with_flash(sink, Map::new())
    }

    pub fn with_flash(sink: S, flash: Map<String, Value>) -> Self {
        Self { sink, flash }
    }

    pub fn flash(&self) -> &Map<String, Value> {
        &self.flash
    }

    /// flash データを丸ごと置き換える
    pub fn set_flash(&mut self, flash: Map<String, Value>) -> &mut Self {
        self.flash = flash;
        self
    }

    /// flash データに 1 件追加する（同名キーは上書き）
    pub fn insert_flash(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.flash.insert(name.into(), value.into());
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// 200 OK: ペイロードを flash と一緒にエンベロープで返す
    pub fn ok<T: Serialize + ?Sized>(&mut self, payload: &T) {
        let encoded = Envelope::new(payload, &self.flash).to_vec();
        self.write_encoded(StatusCode::OK, encoded);
    }

    /// 任意のステータスでペイロードをそのまま JSON として返す
    pub fn json<T: Serialize + ?Sized>(&mut self, status: StatusCode, payload: &T) {
        let encoded = serde_json::to_vec(payload).map_err(RespondError::from);
        self.write_encoded(status, encoded);
    }

    /// 204 No Content
    pub fn no_content(&mut self) {
        self.as_json(StatusCode::NO_CONTENT, None);
    }

    /// 201 Created: リクエストとリソース ID から `Location` を組み立てる
    ///
    /// URL が組み立てられない場合は 500 を返す。
    pub fn created(&mut self, request: &Parts, resource: impl fmt::Display) {
        match build_location_url(request, resource) {
            Ok(url) => self.created_at(url.as_str()),
            Err(e) => self.internal_server_error(Failure::plain(&e)),
        }
    }

    /// 201 Created: 組み立て済みの `Location` を設定する
    pub fn created_at(&mut self, location: &str) {
        match HeaderValue::from_str(location) {
            Ok(value) => {
                self.sink.set_header(header::LOCATION, value);
                self.as_json(StatusCode::CREATED, None);
            }
            Err(e) => self.internal_server_error(Failure::plain(&e)),
        }
    }

    /// 404 Not Found: 要求されたリソースが存在しない
    pub fn not_found<'a>(&mut self, err: impl Into<Failure<'a>>) {
        self.as_json(StatusCode::NOT_FOUND, err.into().to_body());
    }

    /// 401 Unauthorized: 認証情報がない、または誤っている
    pub fn unauthorized<'a>(&mut self, err: impl Into<Failure<'a>>) {
        self.as_json(StatusCode::UNAUTHORIZED, err.into().to_body());
    }

    /// 403 Forbidden: 認可されていない、またはレート制限中
    pub fn forbidden<'a>(&mut self, err: impl Into<Failure<'a>>) {
        self.as_json(StatusCode::FORBIDDEN, err.into().to_body());
    }

    /// 400 Bad Request: リクエストを解釈できない（不正なペイロード、型の不一致など）
    pub fn bad_request<'a>(&mut self, err: impl Into<Failure<'a>>) {
        self.as_json(StatusCode::BAD_REQUEST, err.into().to_body());
    }

    /// 422 Unprocessable Entity
    pub fn unprocessable_entity<'a>(&mut self, err: impl Into<Failure<'a>>) {
        self.as_json(StatusCode::UNPROCESSABLE_ENTITY, err.into().to_body());
    }

    /// 409 Conflict: リソースの現在の状態と競合する
    pub fn conflict<'a>(&mut self, err: impl Into<Failure<'a>>) {
        self.as_json(StatusCode::CONFLICT, err.into().to_body());
    }

    /// 500 Internal Server Error
    pub fn internal_server_error<'a>(&mut self, err: impl Into<Failure<'a>>) {
        let err = err.into();
        if let Some(text) = err.text() {
            tracing::error!(error.message = %text, "内部エラーを返します");
        }
        self.as_json(StatusCode::INTERNAL_SERVER_ERROR, err.to_body());
    }

    /// エラーの分類に従ってレスポンスを返す
    ///
    /// 分類済みエラーは宣言されたステータスへ、それ以外は 500 へ振り分ける。
    pub fn error<'a>(&mut self, err: impl Into<Failure<'a>>) {
        match err.into() {
            Failure::Formatted(err) => self.compose_custom_error(err),
            other => self.internal_server_error(other),
        }
    }

    /// 分類済みエラーをステータスごとの終端メソッドへ振り分ける
    ///
    /// 対応表にないステータスは 500 として扱う。
    pub fn compose_custom_error(&mut self, err: &dyn ErrorFormatter) {
        let failure = Failure::formatted(err);
        match err.status() {
            StatusCode::UNAUTHORIZED => self.unauthorized(failure),
            StatusCode::FORBIDDEN => self.forbidden(failure),
            StatusCode::CONFLICT => self.conflict(failure),
            StatusCode::UNPROCESSABLE_ENTITY => self.unprocessable_entity(failure),
            StatusCode::NOT_FOUND => self.not_found(failure),
            StatusCode::BAD_REQUEST => self.bad_request(failure),
            _ => self.internal_server_error(failure),
        }
    }

    /// プレーンテキストファイルを添付として返す
    pub fn plain(&mut self, stream: &[u8], file_name: &str) {
        match HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\"")) {
            Ok(value) => {
                self.sink.set_header(header::CONTENT_DISPOSITION, value);
                self.file(stream, APPLICATION_PLAIN);
            }
            Err(e) => self.internal_server_error(Failure::plain(&e)),
        }
    }

    /// PDF を返す
    pub fn pdf(&mut self, stream: &[u8]) {
        self.file(stream, APPLICATION_PDF);
    }

    /// スプレッドシートをダウンロードさせる
    pub fn excel(&mut self, stream: &[u8]) {
        self.sink
            .set_header(CONTENT_DESCRIPTION, HeaderValue::from_static("File Transfer"));
        self.sink.set_header(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment;"),
        );
        self.file(stream, APPLICATION_OCTET_STREAM);
    }

    fn write_encoded(&mut self, status: StatusCode, encoded: Result<Vec<u8>, RespondError>) {
        match encoded {
            Ok(body) => self.as_json(status, Some(body)),
            Err(e) => {
                tracing::warn!(error.message = %e, "ペイロードの JSON エンコードに失敗しました");
                self.sink.write_status(StatusCode::INTERNAL_SERVER_ERROR);
                self.write_body(e.to_string().as_bytes());
            }
        }
    }

    fn as_json(&mut self, status: StatusCode, body: Option<Vec<u8>>) {
        self.set_content_type(APPLICATION_JSON);
        self.sink.write_status(status);
        tracing::debug!(http.status_code = status.as_u16(), "レスポンスを書き込みました");

        if does_not_require_content(status) {
            return;
        }

        if let Some(body) = body {
            self.write_body(&body);
        }
    }

    fn file(&mut self, stream: &[u8], content_type: &'static str) {
        self.set_content_type(content_type);
        self.sink.write_status(StatusCode::OK);
        tracing::debug!(
            http.status_code = StatusCode::OK.as_u16(),
            http.content_type = content_type,
            http.body_bytes = stream.len(),
            "ファイルを書き込みました"
        );

        if let Err(e) = self.sink.write(stream) {
            tracing::error!(error.message = %e, "ファイルの書き込みに失敗しました");
            self.sink.write_status(StatusCode::INTERNAL_SERVER_ERROR);
            self.write_body(e.to_string().as_bytes());
        }
    }

    fn set_content_type(&mut self, content_type: &'static str) {
        self.sink
            .set_header(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    fn write_body(&mut self, bytes: &[u8]) {
        if let Err(e) = self.sink.write(bytes) {
            tracing::error!(error.message = %e, "レスポンスボディの書き込みに失敗しました");
        }
    }
}
