//! 公開 API だけを使ったレスポンダの結合テスト

use http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use respond::{ErrorFormatter, Failure, Responder, ResponseRecorder};
use rstest::rstest;
use serde_json::json;
use thiserror::Error;

/// ステータスを外から指定できる分類済みエラー
#[derive(Debug, Error)]
#[error("{message}")]
struct DomainError {
    status:   StatusCode,
    code:     i64,
    message:  String,
    info_url: Option<String>,
}

impl DomainError {
    fn new(status: StatusCode, code: i64, message: &str) -> Self {
        Self {
            status,
            code,
            message: message.to_string(),
            info_url: None,
        }
    }
}

impl ErrorFormatter for DomainError {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn code(&self) -> i64 {
        self.code
    }

    fn info_url(&self) -> Option<String> {
        self.info_url.clone()
    }
}

fn responder(recorder: &mut ResponseRecorder) -> Responder<&mut ResponseRecorder> {
    Responder::new(recorder)
}

#[rstest]
#[case(StatusCode::BAD_REQUEST, 3, "bad Request")]
#[case(StatusCode::UNAUTHORIZED, 10, "token expired")]
#[case(StatusCode::FORBIDDEN, 11, "rate limited")]
#[case(StatusCode::NOT_FOUND, 5, "resource not found")]
#[case(StatusCode::CONFLICT, 12, "version mismatch")]
#[case(StatusCode::UNPROCESSABLE_ENTITY, 13, "invalid state")]
#[case(StatusCode::INTERNAL_SERVER_ERROR, 99, "unexpected")]
fn test_分類済みエラーは宣言したステータスとcodeとmessageを返す(
    #[case] status: StatusCode,
    #[case] code: i64,
    #[case] message: &str,
) {
    let mut recorder = ResponseRecorder::new();
    let err = DomainError::new(status, code, message);

    responder(&mut recorder).error(&err);

    assert_eq!(recorder.status(), status);
    assert_eq!(recorder.header(header::CONTENT_TYPE), Some("application/json"));
    assert_eq!(
        recorder.body_json(),
        Some(json!({ "code": code, "message": message }))
    );
}

#[test]
fn test_info_urlを持つエラーはボディに含める() {
    let mut recorder = ResponseRecorder::new();
    let err = DomainError {
        info_url: Some("https://docs.example.com/e/5".to_string()),
        ..DomainError::new(StatusCode::NOT_FOUND, 5, "resource not found")
    };

    responder(&mut recorder).error(&err);

    let body = recorder.body_json().unwrap();
    assert_eq!(body["info_url"], "https://docs.example.com/e/5");
    assert!(body.get("description").is_none());
}

#[test]
fn test_okは空のflashを持つエンベロープを返す() {
    let mut recorder = ResponseRecorder::new();

    responder(&mut recorder).ok(&json!({ "x": 1 }));

    assert_eq!(recorder.status(), StatusCode::OK);
    assert_eq!(recorder.body_text(), Some(r#"{"data":{"x":1},"flash":{}}"#));
}

#[rstest]
#[case(StatusCode::CREATED)]
#[case(StatusCode::NO_CONTENT)]
#[case(StatusCode::RESET_CONTENT)]
fn test_ボディ不要ステータスは常に空ボディ(#[case] status: StatusCode) {
    let mut recorder = ResponseRecorder::new();

    responder(&mut recorder).json(status, &json!({ "payload": [1, 2, 3] }));

    assert_eq!(recorder.status(), status);
    assert!(recorder.body().is_empty());
}

#[test]
fn test_createdのlocationは絶対urlになる() {
    let mut recorder = ResponseRecorder::new();
    let (parts, _) = Request::post("/ok")
        .header("host", "localhost")
        .body(())
        .unwrap()
        .into_parts();

    responder(&mut recorder).created(&parts, 1);

    assert_eq!(recorder.status(), StatusCode::CREATED);
    let location = recorder.header(header::LOCATION).unwrap();
    let url = url::Url::parse(location).unwrap();
    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host_str(), Some("localhost"));
    assert_eq!(url.path(), "/ok/1");
}

#[test]
fn test_ファイル配信は入力とバイト単位で一致する() {
    let stream: Vec<u8> = (0..=255).collect();

    for (content_type, recorder) in [
        ("application/pdf", Responder::new(ResponseRecorder::new()).pdf(&stream)),
        (
            "application/plain",
            Responder::new(ResponseRecorder::new()).plain(&stream, "bytes.bin"),
        ),
        (
            "application/octet-stream",
            Responder::new(ResponseRecorder::new()).excel(&stream),
        ),
    ] {
        assert_eq!(recorder.status(), StatusCode::OK);
        assert_eq!(recorder.header(header::CONTENT_TYPE), Some(content_type));
        assert_eq!(recorder.body(), stream.as_slice());
    }
}

#[test]
fn test_errorにエラーがなければボディを書かない() {
    let mut recorder = ResponseRecorder::new();

    responder(&mut recorder).error(Failure::Absent);

    assert_eq!(recorder.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(recorder.body().is_empty());
}

#[test]
fn test_noneを渡すとabsentとして扱う() {
    let mut recorder = ResponseRecorder::new();

    responder(&mut recorder).not_found(None::<&DomainError>);

    assert_eq!(recorder.status(), StatusCode::NOT_FOUND);
    assert!(recorder.body().is_empty());
}

#[test]
fn test_分類なしのエラーは生の文字列で返す() {
    let mut recorder = ResponseRecorder::new();
    let err = std::io::Error::other("some error");

    responder(&mut recorder).error(Failure::plain(&err));

    assert_eq!(recorder.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(recorder.body_text(), Some("some error"));
}
