//! # ウィジェット API ハンドラ
//!
//! respond のレスポンダを axum ハンドラから使う例。
//! 各ハンドラは [`Responder`] の終端メソッドを 1 回呼び、その出力先
//! （[`ResponseRecorder`]）をそのままレスポンスとして返す。
//!
//! ## エンドポイント
//!
//! - `GET /widgets` - 一覧（flash に件数）
//! - `POST /widgets` - 作成（201 + `Location`）
//! - `GET /widgets/export.csv` - 一覧をスプレッドシートとしてダウンロード
//! - `GET /widgets/{id}` - 取得
//! - `DELETE /widgets/{id}` - 削除（204）
//! - `GET /widgets/{id}/label.txt` - ラベルをテキストファイルとしてダウンロード

use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use axum::extract::{Path, Request, State};
use respond::{Failure, Responder, ResponseRecorder};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::WidgetError;

/// 1 ウィジェットあたりの数量上限
const MAX_QUANTITY: u32 = 10_000;

/// 作成リクエストのボディ上限（バイト）
const MAX_BODY_BYTES: usize = 64 * 1024;

/// ウィジェット
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id:       u64,
    pub name:     String,
    pub quantity: u32,
}

/// 作成リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct NewWidget {
    pub name:     String,
    pub quantity: u32,
}

/// ハンドラ間で共有するインメモリのウィジェット一覧
#[derive(Debug)]
pub struct WidgetState {
    widgets: RwLock<BTreeMap<u64, Widget>>,
    next_id: AtomicU64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            widgets: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl WidgetState {
    pub async fn list(&self) -> Vec<Widget> {
        self.widgets.read().await.values().cloned().collect()
    }

    pub async fn find(&self, id: u64) -> Option<Widget> {
        self.widgets.read().await.get(&id).cloned()
    }

    /// 検証してから登録する
    pub async fn insert(&self, input: NewWidget) -> Result<Widget, WidgetError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(WidgetError::Validation("name は必須です".to_string()));
        }
        if input.quantity > MAX_QUANTITY {
            return Err(WidgetError::Validation(format!(
                "quantity は {MAX_QUANTITY} 以下である必要があります"
            )));
        }

        let mut widgets = self.widgets.write().await;
        if widgets.values().any(|w| w.name == name) {
            return Err(WidgetError::Conflict(name));
        }

        let widget = Widget {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name,
            quantity: input.quantity,
        };
        widgets.insert(widget.id, widget.clone());
        Ok(widget)
    }

    pub async fn remove(&self, id: u64) -> Option<Widget> {
        self.widgets.write().await.remove(&id)
    }
}

fn responder() -> Responder<ResponseRecorder> {
    Responder::new(ResponseRecorder::new())
}

/// GET /widgets
pub async fn list_widgets(State(state): State<Arc<WidgetState>>) -> ResponseRecorder {
    let widgets = state.list().await;
    responder().with("count", widgets.len()).ok(&widgets)
}

/// GET /widgets/{id}
pub async fn get_widget(
    State(state): State<Arc<WidgetState>>,
    Path(id): Path<u64>,
) -> ResponseRecorder {
    match state.find(id).await {
        Some(widget) => responder().ok(&widget),
        None => responder().error(&WidgetError::NotFound(id)),
    }
}

/// POST /widgets
///
/// ボディは自前でパースし、不正な JSON も分類済みエラーとして返す。
/// `Location` の組み立てにリクエストのヘッダーと URI を使う。
pub async fn create_widget(
    State(state): State<Arc<WidgetState>>,
    request: Request,
) -> ResponseRecorder {
    let (parts, body) = request.into_parts();
    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => return responder().bad_request(Failure::plain(&e)),
    };

    let result = match serde_json::from_slice::<NewWidget>(&body) {
        Ok(input) => state.insert(input).await,
        Err(e) => Err(WidgetError::from(e)),
    };

    match result {
        Ok(widget) => {
            tracing::info!(widget.id = widget.id, "ウィジェットを作成しました");
            responder().created(&parts, widget.id)
        }
        Err(e) => responder().error(&e),
    }
}

/// DELETE /widgets/{id}
pub async fn delete_widget(
    State(state): State<Arc<WidgetState>>,
    Path(id): Path<u64>,
) -> ResponseRecorder {
    match state.remove(id).await {
        Some(_) => responder().no_content(),
        None => responder().error(&WidgetError::NotFound(id)),
    }
}

/// GET /widgets/export.csv
pub async fn export_widgets(State(state): State<Arc<WidgetState>>) -> ResponseRecorder {
    let mut csv = String::from("id,name,quantity\n");
    for widget in state.list().await {
        csv.push_str(&format!("{},{},{}\n", widget.id, widget.name, widget.quantity));
    }
    responder().excel(csv.as_bytes())
}

/// GET /widgets/{id}/label.txt
pub async fn widget_label(
    State(state): State<Arc<WidgetState>>,
    Path(id): Path<u64>,
) -> ResponseRecorder {
    match state.find(id).await {
        Some(widget) => {
            let label = format!("{} x {}\n", widget.name, widget.quantity);
            responder().plain(label.as_bytes(), &format!("widget-{id}.txt"))
        }
        None => responder().error(&WidgetError::NotFound(id)),
    }
}
