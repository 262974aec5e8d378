//! # respond のエラー定義
//!
//! ヘルパー内部の失敗（JSON エンコードと URL 組み立て）を表す。
//! 終端メソッドはこのエラーを返さず、500 レスポンスとして描画する。

use thiserror::Error;

/// respond 内部で発生するエラー
#[derive(Debug, Error)]
pub enum RespondError {
    /// JSON エンコードに失敗した
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// `Location` 用の URL が絶対 URL として成立しない
    #[error("Location URL を組み立てられません: {input}")]
    Location {
        /// 組み立てた文字列
        input:  String,
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonエラーはエンコーダのメッセージをそのまま表示する() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();

        let error = RespondError::from(source);

        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_locationエラーは入力文字列を含む() {
        let error = RespondError::Location {
            input:  "http:///users/1".to_string(),
            source: url::ParseError::EmptyHost,
        };

        assert!(error.to_string().contains("http:///users/1"));
    }
}
