// 単一アクションの IDLE/ACTIVE 状態管理セル
// 各レポーター実装が埋め込んで使用する共有部品

use crate::core::error::{StatusError, StatusResult};
use crate::core::types::{ActionState, Progress, StatusSnapshot};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

/// トラッカー内部の状態
#[derive(Debug, Default)]
struct TrackerState {
    state: ActionState,
    message: Option<String>,
    progress: Option<Progress>,
    started_at: Option<DateTime<Utc>>,
}

/// 単一の「現在のアクション」スロットを管理する状態セル
///
/// レポーター 1 インスタンスにつき同時に開けるアクションは 1 つ。
/// Clone はハンドルの複製で、状態は共有される。
///
/// 厳格な `begin` / `update` / `end` は順序違反を `Err` で返す。
/// 寛容な `force_begin` は開いているアクションを無条件に置き換える
/// (修正リセット)。どちらの方針を採るかは実装側の選択に委ねる。
#[derive(Debug, Clone, Default)]
pub struct StatusTracker {
    inner: Arc<Mutex<TrackerState>>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// アクション開始 (厳格版)
    ///
    /// 既にアクティブな場合は `ActionAlreadyActive` を返し、状態は変えない
    pub fn begin(&self, message: &str) -> StatusResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.state == ActionState::Active {
            let current = state.message.clone().unwrap_or_default();
            return Err(StatusError::action_already_active(current));
        }
        state.state = ActionState::Active;
        state.message = Some(message.to_string());
        state.progress = None;
        state.started_at = Some(Utc::now());
        Ok(())
    }

    /// アクション開始 (寛容版)
    ///
    /// 開いているアクションがあっても無条件に新しいアクションを採用する
    pub fn force_begin(&self, message: &str) {
        let mut state = self.inner.lock().unwrap();
        state.state = ActionState::Active;
        state.message = Some(message.to_string());
        state.progress = None;
        state.started_at = Some(Utc::now());
    }

    /// メッセージと進捗の更新
    ///
    /// アイドル中は `NoActiveAction` を返し、状態は変えない
    pub fn update(&self, message: &str, progress: Progress) -> StatusResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.state != ActionState::Active {
            return Err(StatusError::no_active_action("update_action"));
        }
        state.message = Some(message.to_string());
        state.progress = Some(progress);
        Ok(())
    }

    /// アクション終了
    ///
    /// アイドル状態に戻し、メッセージ・進捗・開始時刻をすべてクリアする。
    /// アイドル中は `NoActiveAction` を返す
    pub fn end(&self) -> StatusResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.state != ActionState::Active {
            return Err(StatusError::no_active_action("stop_action"));
        }
        *state = TrackerState::default();
        Ok(())
    }

    /// 現在状態のスナップショットを取得
    pub fn snapshot(&self) -> StatusSnapshot {
        let state = self.inner.lock().unwrap();
        StatusSnapshot {
            state: state.state,
            message: state.message.clone(),
            progress: state.progress,
            started_at: state.started_at,
        }
    }

    /// アクションが進行中かどうか
    pub fn is_active(&self) -> bool {
        self.inner.lock().unwrap().state == ActionState::Active
    }
}
