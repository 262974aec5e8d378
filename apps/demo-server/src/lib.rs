//! # respond デモサーバー
//!
//! respond を axum に組み込んだウィジェット API。
//! ルーターを [`app`] として公開し、`main.rs` とテストの両方から使う。

pub mod config;
pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{
    WidgetState,
    create_widget,
    delete_widget,
    export_widgets,
    get_widget,
    list_widgets,
    widget_label,
};

/// ルーターを構築する
pub fn app(state: Arc<WidgetState>) -> Router {
    Router::new()
        .route("/widgets", get(list_widgets).post(create_widget))
        .route("/widgets/export.csv", get(export_widgets))
        .route("/widgets/{id}", get(get_widget).delete(delete_widget))
        .route("/widgets/{id}/label.txt", get(widget_label))
        .with_state(state)
}
