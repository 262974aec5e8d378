//! # Location URL の組み立て
//!
//! `201 Created` の `Location` ヘッダーに入れる絶対 URL を、受信したリクエストの
//! スキーム・ホスト・パスから組み立てる。
//!
//! スキームは URI → `X-Forwarded-Proto` → `http` の順、
//! ホストは URI の authority → `Host` ヘッダーの順で解決する。

use std::fmt;

use http::{HeaderName, header, request::Parts};
use url::Url;

use crate::error::RespondError;

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// リクエストのスキームとホスト
fn origin(parts: &Parts) -> (String, String) {
    let scheme = parts
        .uri
        .scheme_str()
        .or_else(|| {
            parts
                .headers
                .get(X_FORWARDED_PROTO)
                .and_then(|v| v.to_str().ok())
        })
        .unwrap_or("http")
        .to_string();

    let host = parts
        .uri
        .authority()
        .map(|a| a.as_str())
        .or_else(|| parts.headers.get(header::HOST).and_then(|v| v.to_str().ok()))
        .unwrap_or_default()
        .to_string();

    (scheme, host)
}

/// 作成したリソースの URL を組み立てる
///
/// `{scheme}://{host}{path}/{resource}` の形式。クエリ文字列は含めない。
/// オリジンとパスを [`Url`] としてパースしたうえで、`resource` を 1 つのパスセグメントとして
/// パーセントエンコードして追加する（`/` や `?` を含んでも URL の構造は変わらない）。
///
/// ```
/// use http::Request;
/// use respond::build_location_url;
///
/// let (parts, _) = Request::post("/users")
///     .header("host", "api.example.com")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// let url = build_location_url(&parts, 42).unwrap();
/// assert_eq!(url.as_str(), "http://api.example.com/users/42");
/// ```
pub fn build_location_url(parts: &Parts, resource: impl fmt::Display) -> Result<Url, RespondError> {
    let (scheme, host) = origin(parts);
    let path = parts.uri.path().trim_end_matches('/');
    let input = format!("{scheme}://{host}{path}");

    // 空ホストは url クレートが後続のパスをホストとして読んでしまう
    if host.is_empty() {
        return Err(RespondError::Location {
            input,
            source: url::ParseError::EmptyHost,
        });
    }

    let mut url = match Url::parse(&input) {
        Ok(url) => url,
        Err(source) => return Err(RespondError::Location { input, source }),
    };

    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().push(&resource.to_string());
        }
        Err(()) => {
            return Err(RespondError::Location {
                input,
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }
    }

    Ok(url)
}

/// リクエストのオリジンを基点に任意パスの URI を組み立てる
///
/// ```
/// use http::Request;
/// use respond::UriComponentsBuilder;
///
/// let (parts, _) = Request::get("https://api.example.com/ignored")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// let uri = UriComponentsBuilder::from_request(&parts)
///     .path("reports/7")
///     .to_uri();
/// assert_eq!(uri, "https://api.example.com/reports/7");
/// ```
#[derive(Debug, Clone)]
pub struct UriComponentsBuilder {
    scheme: String,
    host:   String,
    path:   String,
}

impl UriComponentsBuilder {
    pub fn from_request(parts: &Parts) -> Self {
        let (scheme, host) = origin(parts);
        Self {
            scheme,
            host,
            path: String::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// 先頭のスラッシュを 1 つに揃えて URI 文字列を返す
    pub fn to_uri(&self) -> String {
        format!(
            "{}://{}/{}",
            self.scheme,
            self.host,
            self.path.trim_start_matches('/')
        )
    }

    /// URI を [`Url`] として検証して返す
    pub fn to_url(&self) -> Result<Url, RespondError> {
        let input = self.to_uri();
        Url::parse(&input).map_err(|source| RespondError::Location { input, source })
    }
}
