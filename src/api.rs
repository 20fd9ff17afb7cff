// 高レベル公開API
// レポーターを使った呼び出し側の定型処理をまとめた便利関数

use crate::core::ActionStatusReporter;
use std::future::Future;

/// 任意の Future を start_action / stop_action で挟んで実行
///
/// Future の完了後 (出力が `Err` を含む場合も) 必ず `stop_action` が
/// 呼ばれるため、レポーターはアイドル状態に戻る。
///
/// # Examples
///
/// ```
/// use action_status::api::run_reported;
/// use action_status::services::InMemoryStatusReporter;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let reporter = InMemoryStatusReporter::new();
/// let result = run_reported(&reporter, "合計を計算中", async { 1 + 2 }).await;
/// assert_eq!(result, 3);
/// assert!(!reporter.is_active());
/// # });
/// ```
pub async fn run_reported<R, F, T>(reporter: &R, message: &str, future: F) -> T
where
    R: ActionStatusReporter + ?Sized,
    F: Future<Output = T>,
{
    reporter.start_action(message).await;
    let output = future.await;
    reporter.stop_action().await;
    output
}
