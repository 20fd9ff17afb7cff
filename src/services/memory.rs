// メモリ内記録によるステータス報告の具象実装
// モックテストにも使用可能な完全機能実装

use crate::core::{
    ActionStatusReporter, Progress, StatusError, StatusEvent, StatusSnapshot, StatusTracker,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// メモリ内記録のステータス報告実装（テスト用および開発用）
///
/// 受理した呼び出しを `StatusEvent` として、契約違反を `StatusError`
/// として順序どおりに記録する。Clone はログを共有する。
#[derive(Debug, Default, Clone)]
pub struct InMemoryStatusReporter {
    tracker: StatusTracker,
    events: Arc<Mutex<Vec<StatusEvent>>>,
    misuses: Arc<Mutex<Vec<StatusError>>>,
}

impl InMemoryStatusReporter {
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

    /// テスト用：記録されたイベントを取得
    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.lock().unwrap().clone()
    }

    /// テスト用：記録された契約違反を取得
    pub fn misuses(&self) -> Vec<StatusError> {
        self.misuses.lock().unwrap().clone()
    }

    /// テスト用：記録されたイベント数を取得
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// テスト用：記録をクリア
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
        self.misuses.lock().unwrap().clear();
    }

    fn record_event(&self, event: StatusEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn record_misuse(&self, violation: StatusError) {
        self.misuses.lock().unwrap().push(violation);
    }
}

#[async_trait]
impl ActionStatusReporter for InMemoryStatusReporter {
    async fn start_action(&self, message: &str) {
        if let Err(violation) = self.tracker.begin(message) {
            self.record_misuse(violation);
            self.tracker.force_begin(message);
        }
        self.record_event(StatusEvent::started(message));
    }

    async fn update_action(&self, message: &str, progress: i32) {
        let progress = match Progress::from_raw(progress) {
            Ok(progress) => progress,
            Err(violation) => {
                self.record_misuse(violation);
                return;
            }
        };

        match self.tracker.update(message, progress) {
            Ok(()) => self.record_event(StatusEvent::updated(message, progress)),
            Err(violation) => self.record_misuse(violation),
        }
    }

    async fn stop_action(&self) {
        match self.tracker.end() {
            Ok(()) => self.record_event(StatusEvent::stopped()),
            Err(violation) => self.record_misuse(violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_reporter_records_full_cycle_in_order() {
        let reporter = InMemoryStatusReporter::new();

        reporter.start_action("A").await;
        reporter.update_action("A1", 50).await;
        reporter.update_action("A2", 100).await;
        reporter.stop_action().await;

        let events = reporter.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], StatusEvent::Started { message, .. } if message == "A"));
        assert!(matches!(
            &events[1],
            StatusEvent::Updated { message, progress, .. }
                if message == "A1" && *progress == Progress::Percent(50)
        ));
        assert!(matches!(
            &events[2],
            StatusEvent::Updated { message, progress, .. }
                if message == "A2" && *progress == Progress::Percent(100)
        ));
        assert!(matches!(&events[3], StatusEvent::Stopped { .. }));

        // 正常なサイクルでは違反の記録はない
        assert!(reporter.misuses().is_empty());
        assert_eq!(reporter.snapshot(), StatusSnapshot::idle());
    }

    #[tokio::test]
    async fn test_memory_reporter_records_ordering_violations() {
        let reporter = InMemoryStatusReporter::new();

        // start 前の update は記録されず、違反が 1 件残る
        reporter.update_action("早すぎる", 10).await;

        assert_eq!(reporter.event_count(), 0);
        let misuses = reporter.misuses();
        assert_eq!(misuses.len(), 1);
        assert!(misuses[0].is_ordering_violation());
        assert_eq!(reporter.snapshot(), StatusSnapshot::idle());
    }

    #[tokio::test]
    async fn test_memory_reporter_records_out_of_range_progress() {
        let reporter = InMemoryStatusReporter::new();
        reporter.start_action("A").await;

        reporter.update_action("A1", 200).await;

        // 範囲外更新はイベントにならない
        assert_eq!(reporter.event_count(), 1); // Started のみ
        let misuses = reporter.misuses();
        assert_eq!(misuses.len(), 1);
        assert_eq!(misuses[0], StatusError::progress_out_of_range(200));
        assert!(!misuses[0].is_ordering_violation());
    }

    #[tokio::test]
    async fn test_memory_reporter_double_start() {
        let reporter = InMemoryStatusReporter::new();

        reporter.start_action("A").await;
        reporter.start_action("B").await;

        // 両方の Started が記録され、違反も 1 件記録される
        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(reporter.misuses().len(), 1);
        assert_eq!(reporter.snapshot().message.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_memory_reporter_clear() {
        let reporter = InMemoryStatusReporter::new();

        reporter.start_action("A").await;
        reporter.stop_action().await;
        reporter.stop_action().await; // 違反 1 件

        assert_eq!(reporter.event_count(), 2);
        assert_eq!(reporter.misuses().len(), 1);

        reporter.clear();

        assert_eq!(reporter.event_count(), 0);
        assert!(reporter.misuses().is_empty());
    }

    #[tokio::test]
    async fn test_memory_reporter_clone_shares_logs() {
        let reporter = InMemoryStatusReporter::new();
        let handle = reporter.clone();

        reporter.start_action("共有").await;

        assert_eq!(handle.event_count(), 1);
        assert!(handle.is_active());
    }
}
