//! # respond
//!
//! HTTP ハンドラの「結果」を HTTP レスポンスへ写像するヘルパー群。
//!
//! ハンドラは `ok` / `not_found` / `created` のような短い呼び出しを 1 回行うだけで、
//! ステータスコード・ヘッダー・JSON ボディの組み立てを任せられる。
//!
//! ## 構成
//!
//! - [`Responder`]: リクエスト単位のファサード（終端メソッドは `self` を消費する）
//! - [`HttpResponse`]: 実際の書き込みと、エラー分類によるステータス振り分け
//! - [`ErrorFormatter`]: ドメインエラーが実装する分類トレイト
//! - [`ResponseSink`] / [`ResponseRecorder`]: 出力先の抽象とインメモリ実装
//! - [`write`]: flash を持たない関数版 API
//! - [`location`]: `Location` ヘッダー用 URL の組み立て
//!
//! ## 使用例
//!
//! ```
//! use respond::{Responder, ResponseRecorder};
//! use serde_json::json;
//!
//! let recorder = Responder::new(ResponseRecorder::new())
//!     .with("notice", "保存しました")
//!     .ok(&json!({ "id": 1 }));
//!
//! assert_eq!(recorder.status(), http::StatusCode::OK);
//! assert_eq!(
//!     recorder.body_json(),
//!     Some(json!({ "data": { "id": 1 }, "flash": { "notice": "保存しました" } }))
//! );
//! ```

pub mod content;
pub mod envelope;
pub mod error;
pub mod formatter;
pub mod location;
pub mod observability;
pub mod recorder;
pub mod responder;
pub mod response;
pub mod sink;
pub mod write;

pub use envelope::{Envelope, ErrorBody};
pub use error::RespondError;
pub use formatter::{ErrorFormatter, Failure};
pub use location::{UriComponentsBuilder, build_location_url};
pub use recorder::ResponseRecorder;
pub use responder::Responder;
pub use response::HttpResponse;
pub use sink::ResponseSink;
