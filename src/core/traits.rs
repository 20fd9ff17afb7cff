// ステータス報告システムのトレイト定義
// 実行中のアクションのライフサイクルを観測者へ通知するための契約

use async_trait::async_trait;
use mockall::automock;

/// アクションステータス報告の抽象化トレイト
///
/// 長時間実行されるアクションの開始・進捗・終了を、観測者
/// (典型的には UI 層のプログレスバーやステータスラベル) へ通知する。
///
/// 契約上の呼び出し順序: `start_action` → `update_action`* → `stop_action`。
/// `start_action` と `stop_action` の間以外での `update_action` 呼び出しは
/// 契約上未定義であり、このクレートの実装は一律のポリシーで解決する
/// (順序違反は状態を変えず、実装ごとの診断チャンネルへ報告する)。
#[automock]
#[async_trait]
pub trait ActionStatusReporter: Send + Sync {
    /// アクション開始の報告
    ///
    /// この呼び出し以降、観測者は「アクション進行中」を示す
    async fn start_action(&self, message: &str);

    /// 進捗更新の報告
    ///
    /// `progress` は `0..=100` のパーセント値、または `-1` (全長不明)
    async fn update_action(&self, message: &str, progress: i32);

    /// アクション終了の報告
    ///
    /// この呼び出し以降、次の `start_action` まで何も示されない
    async fn stop_action(&self);
}

// ActionStatusReporter for Box<dyn ActionStatusReporter>
#[async_trait]
impl ActionStatusReporter for Box<dyn ActionStatusReporter> {
    async fn start_action(&self, message: &str) {
        self.as_ref().start_action(message).await
    }

    async fn update_action(&self, message: &str, progress: i32) {
        self.as_ref().update_action(message, progress).await
    }

    async fn stop_action(&self) {
        self.as_ref().stop_action().await
    }
}
