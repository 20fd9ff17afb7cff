// チャンネル経由のステータス報告実装
// UI タスクなど単一の消費者へイベントを橋渡しする

use crate::core::{ActionStatusReporter, Progress, StatusEvent, StatusSnapshot, StatusTracker};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// 有界 mpsc チャンネルへのステータス報告実装
///
/// 受理した呼び出しを `StatusEvent` として単一の消費者 (UI タスク) へ
/// 送信する。バッファ満杯時は送信が空きを待ち、受信側が破棄された後は
/// 送信エラーを無視する (閉じた UI が報告側を落とさないようにするため)。
/// 1 対 1 の橋渡しであり、イベントバスではない。
#[derive(Debug, Clone)]
pub struct ChannelStatusReporter {
    tracker: StatusTracker,
    tx: mpsc::Sender<StatusEvent>,
}

impl ChannelStatusReporter {
    /// レポーターと受信側のペアを作成
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<StatusEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (
            Self {
                tracker: StatusTracker::new(),
                tx,
            },
            rx,
        )
    }

    /// 現在状態のスナップショットを取得
    pub fn snapshot(&self) -> StatusSnapshot {
        self.tracker.snapshot()
    }

    /// アクションが進行中かどうか
    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    async fn send(&self, event: StatusEvent) {
        // 受信側が破棄済みの場合のエラーは無視
        let _ = self.tx.send(event).await;
    }
}

#[async_trait]
impl ActionStatusReporter for ChannelStatusReporter {
    async fn start_action(&self, message: &str) {
        if self.tracker.begin(message).is_err() {
            // 違反の診断は破棄し、新しいアクションを採用
            self.tracker.force_begin(message);
        }
        self.send(StatusEvent::started(message)).await;
    }

    async fn update_action(&self, message: &str, progress: i32) {
        let Ok(progress) = Progress::from_raw(progress) else {
            return;
        };
        if self.tracker.update(message, progress).is_ok() {
            self.send(StatusEvent::updated(message, progress)).await;
        }
    }

    async fn stop_action(&self) {
        if self.tracker.end().is_ok() {
            self.send(StatusEvent::stopped()).await;
        }
    }
}
