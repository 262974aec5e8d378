//! # レスポンダ
//!
//! リクエスト単位で生成するファサード。flash データを積んだあと、
//! 終端メソッドを 1 回だけ呼ぶ。終端メソッドは `self` を消費して出力先を返すため、
//! 2 回目の呼び出しはコンパイルエラーになる。
//!
//! ## 使用例
//!
//! ```
//! use http::StatusCode;
//! use respond::{Failure, Responder, ResponseRecorder};
//!
//! let err = std::io::Error::other("connection reset");
//! let recorder = Responder::new(ResponseRecorder::new()).error(Failure::plain(&err));
//!
//! assert_eq!(recorder.status(), StatusCode::INTERNAL_SERVER_ERROR);
//! assert_eq!(recorder.body_text(), Some("connection reset"));
//! ```

use std::fmt;

use http::{StatusCode, request::Parts};
use serde::Serialize;
use serde_json::Value;

use crate::{
    formatter::Failure,
    response::HttpResponse,
    sink::ResponseSink,
};

/// リクエスト単位のレスポンダ
#[derive(Debug)]
pub struct Responder<S> {
    response: HttpResponse<S>,
}

impl<S: ResponseSink> Responder<S> {
    pub fn new(sink: S) -> Self {
        Self {
            response: HttpResponse::new(sink),
        }
    }

    /// flash データを追加する
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.response.insert_flash(name, value);
        self
    }

    /// 内部の [`HttpResponse`] を取り出す（終端メソッドを複数回呼ぶ必要がある場合）
    pub fn into_inner(self) -> HttpResponse<S> {
        self.response
    }

    /// 200 OK
    pub fn ok<T: Serialize + ?Sized>(mut self, payload: &T) -> S {
        self.response.ok(payload);
        self.response.into_sink()
    }

    /// 任意のステータスで JSON を返す
    pub fn json<T: Serialize + ?Sized>(mut self, status: StatusCode, payload: &T) -> S {
        self.response.json(status, payload);
        self.response.into_sink()
    }

    /// 204 No Content
    pub fn no_content(mut self) -> S {
        self.response.no_content();
        self.response.into_sink()
    }

    /// 201 Created
    pub fn created(mut self, request: &Parts, resource: impl fmt::Display) -> S {
        self.response.created(request, resource);
        self.response.into_sink()
    }

    /// 201 Created（`Location` を直接指定）
    pub fn created_at(mut self, location: &str) -> S {
        self.response.created_at(location);
        self.response.into_sink()
    }

    /// 404 Not Found
    pub fn not_found<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.not_found(err);
        self.response.into_sink()
    }

    /// 401 Unauthorized
    pub fn unauthorized<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.unauthorized(err);
        self.response.into_sink()
    }

    /// 403 Forbidden
    pub fn forbidden<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.forbidden(err);
        self.response.into_sink()
    }

    /// 400 Bad Request
    pub fn bad_request<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.bad_request(err);
        self.response.into_sink()
    }

    /// 422 Unprocessable Entity
    pub fn unprocessable_entity<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.unprocessable_entity(err);
        self.response.into_sink()
    }

    /// 409 Conflict
    pub fn conflict<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.conflict(err);
        self.response.into_sink()
    }

    /// 500 Internal Server Error
    pub fn internal_server_error<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.internal_server_error(err);
        self.response.into_sink()
    }

    /// エラーの分類に従ってレスポンスを返す
    pub fn error<'a>(mut self, err: impl Into<Failure<'a>>) -> S {
        self.response.error(err);
        self.response.into_sink()
    }

    /// プレーンテキストファイル
    pub fn plain(mut self, stream: &[u8], file_name: &str) -> S {
        self.response.plain(stream, file_name);
        self.response.into_sink()
    }

    /// PDF ファイル
    pub fn pdf(mut self, stream: &[u8]) -> S {
        self.response.pdf(stream);
        self.response.into_sink()
    }

    /// スプレッドシート
    pub fn excel(mut self, stream: &[u8]) -> S {
        self.response.excel(stream);
        self.response.into_sink()
    }
}
