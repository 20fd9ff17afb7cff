// コンソール出力によるステータス報告の具象実装

use crate::core::{ActionStatusReporter, Progress, StatusSnapshot, StatusTracker};
use async_trait::async_trait;

/// コンソール出力によるステータス報告実装
///
/// 開始・更新・終了を stdout に 1 行ずつ出力する。
/// 順序違反は stderr に警告を出す (quiet 時は両方とも抑制)。
#[derive(Debug, Default, Clone)]
pub struct ConsoleStatusReporter {
    tracker: StatusTracker,
    quiet: bool,
}

impl ConsoleStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            tracker: StatusTracker::new(),
            quiet: true,
        }
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
impl ActionStatusReporter for ConsoleStatusReporter {
    async fn start_action(&self, message: &str) {
        if let Err(violation) = self.tracker.begin(message) {
            // 修正リセット: 開いていたアクションを破棄して新しいアクションを採用
            if !self.quiet {
                eprintln!("⚠️  順序違反: {violation}");
            }
            self.tracker.force_begin(message);
        }
        if !self.quiet {
            println!("🚀 開始: {message}");
        }
    }

    async fn update_action(&self, message: &str, progress: i32) {
        let progress = match Progress::from_raw(progress) {
            Ok(progress) => progress,
            Err(violation) => {
                // 定義域外の進捗値は更新ごと破棄
                if !self.quiet {
                    eprintln!("⚠️  {violation}");
                }
                return;
            }
        };

        match self.tracker.update(message, progress) {
            Ok(()) => {
                if !self.quiet {
                    println!("📊 進捗: {message} ({progress})");
                }
            }
            Err(violation) => {
                if !self.quiet {
                    eprintln!("⚠️  順序違反: {violation}");
                }
            }
        }
    }

    async fn stop_action(&self) {
        match self.tracker.end() {
            Ok(()) => {
                if !self.quiet {
                    println!("✅ 完了");
                }
            }
            Err(violation) => {
                if !self.quiet {
                    eprintln!("⚠️  順序違反: {violation}");
                }
            }
        }
    }
}

/// 何もしないステータス報告実装（テスト・ベンチマーク用）
///
/// 出力は一切行わないが状態は追跡するため、停止後アイドルの保証は
/// この実装でも守られる
#[derive(Debug, Default, Clone)]
pub struct NoOpStatusReporter {
    tracker: StatusTracker,
}

impl NoOpStatusReporter {
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
impl ActionStatusReporter for NoOpStatusReporter {
    async fn start_action(&self, message: &str) {
        // 診断は破棄、状態のみ追跡
        self.tracker.force_begin(message);
    }

    async fn update_action(&self, message: &str, progress: i32) {
        if let Ok(progress) = Progress::from_raw(progress) {
            let _ = self.tracker.update(message, progress);
        }
    }

    async fn stop_action(&self) {
        let _ = self.tracker.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionState;

    #[tokio::test]
    async fn test_console_reporter_creation() {
        let reporter1 = ConsoleStatusReporter::new();
        let reporter2 = ConsoleStatusReporter::quiet();

        assert!(!reporter1.quiet);
        assert!(reporter2.quiet);
    }

    #[tokio::test]
    async fn test_console_reporter_lifecycle() {
        // 出力キャプチャは複雑なため、quiet mode で状態遷移のみ確認
        let reporter = ConsoleStatusReporter::quiet();

        reporter.start_action("テスト処理").await;
        assert!(reporter.is_active());
        assert_eq!(
            reporter.snapshot().message.as_deref(),
            Some("テスト処理")
        );

        reporter.update_action("処理中", 50).await;
        let snapshot = reporter.snapshot();
        assert_eq!(snapshot.message.as_deref(), Some("処理中"));
        assert_eq!(snapshot.progress, Some(Progress::Percent(50)));

        reporter.stop_action().await;
        assert_eq!(reporter.snapshot(), StatusSnapshot::idle());
    }

    #[tokio::test]
    async fn test_console_reporter_adopts_second_start() {
        let reporter = ConsoleStatusReporter::quiet();

        reporter.start_action("A").await;
        reporter.start_action("B").await;

        // 2 回目の start は新しいアクションを採用する
        assert_eq!(reporter.snapshot().message.as_deref(), Some("B"));
        assert_eq!(reporter.snapshot().state, ActionState::Active);
    }

    #[tokio::test]
    async fn test_console_reporter_drops_out_of_range_progress() {
        let reporter = ConsoleStatusReporter::quiet();
        reporter.start_action("A").await;
        reporter.update_action("A1", 30).await;

        // 定義域外の更新は破棄され、直前の状態が残る
        reporter.update_action("A2", 150).await;

        let snapshot = reporter.snapshot();
        assert_eq!(snapshot.message.as_deref(), Some("A1"));
        assert_eq!(snapshot.progress, Some(Progress::Percent(30)));
    }

    #[tokio::test]
    async fn test_console_reporter_update_before_start_is_noop() {
        let reporter = ConsoleStatusReporter::quiet();

        reporter.update_action("早すぎる更新", 10).await;

        assert_eq!(reporter.snapshot(), StatusSnapshot::idle());
    }

    #[tokio::test]
    async fn test_noop_reporter_still_tracks_state() {
        let reporter = NoOpStatusReporter::new();

        reporter.start_action("静音処理").await;
        assert!(reporter.is_active());

        reporter.update_action("進行中", -1).await;
        assert_eq!(
            reporter.snapshot().progress,
            Some(Progress::Indeterminate)
        );

        reporter.stop_action().await;
        assert_eq!(reporter.snapshot(), StatusSnapshot::idle());
    }

    #[tokio::test]
    async fn test_noop_reporter_misuse_does_not_panic() {
        let reporter = NoOpStatusReporter::new();

        // 順序違反でもパニックしない
        reporter.update_action("更新", 50).await;
        reporter.stop_action().await;
        reporter.update_action("更新", 999).await;

        assert_eq!(reporter.snapshot(), StatusSnapshot::idle());
    }
}
