// tracing ファサードへのステータス報告実装
// サブスクライバーの管理はバイナリ側の責任 (ライブラリは emit のみ)

use crate::core::{ActionStatusReporter, Progress, StatusSnapshot, StatusTracker};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// tracing ファサードによるステータス報告実装
///
/// 開始・終了は `info!`、更新は `debug!`、順序違反は `warn!` で記録する
#[derive(Debug, Default, Clone)]
pub struct TracingStatusReporter {
    tracker: StatusTracker,
}

impl TracingStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在状態のスナップショットを取得
    pub fn snapshot(&self) -> StatusSnapshot {
        self.tracker.snapshot()
    }

    /// アクションが進行中かどうか
    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }
}

#[async_trait]
impl ActionStatusReporter for TracingStatusReporter {
    async fn start_action(&self, message: &str) {
        if let Err(violation) = self.tracker.begin(message) {
            warn!(message, %violation, "action already active, adopting new action");
            self.tracker.force_begin(message);
        }
        info!(message, "action started");
    }

    async fn update_action(&self, message: &str, progress: i32) {
        let progress = match Progress::from_raw(progress) {
            Ok(progress) => progress,
            Err(violation) => {
                warn!(message, %violation, "update dropped");
                return;
            }
        };

        match self.tracker.update(message, progress) {
            Ok(()) => debug!(message, progress = %progress, "action updated"),
            Err(violation) => warn!(message, %violation, "update ignored"),
        }
    }

    async fn stop_action(&self) {
        match self.tracker.end() {
            Ok(()) => info!("action stopped"),
            Err(violation) => warn!(%violation, "stop ignored"),
        }
    }
}
