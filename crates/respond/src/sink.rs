//! # レスポンス出力先
//!
//! HTTP サーバーフレームワークが提供する「ヘッダー設定」「ステータス書き込み」
//! 「ボディ書き込み」の 3 操作だけを抽象化する。

use std::io;

use http::{HeaderName, HeaderValue, StatusCode};

/// レスポンスの書き込み先
///
/// ステータスは 1 回だけ書き込まれる前提。2 回目以降の扱いは実装に委ねる。
pub trait ResponseSink {
    /// ヘッダーを設定する（同名のヘッダーは置き換える）
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// ステータスコードを書き込む
    fn write_status(&mut self, status: StatusCode);

    /// ボディにバイト列を書き込む
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        (**self).set_header(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        (**self).write_status(status);
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}
