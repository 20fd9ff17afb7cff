use action_status::{run_reported, ActionStatusReporter, ConsoleStatusReporter, INDETERMINATE};
use std::time::Duration;

#[tokio::main]
async fn main() {
    println!("=== コンソールステータス報告のデモ ===\n");

    let reporter = ConsoleStatusReporter::new();

    // 1. 基本的なライフサイクル (開始 → 更新 → 終了)
    println!("--- 進捗率が分かるアクション ---");
    reporter.start_action("ファイルをコピー中").await;
    for step in 1..=4 {
        tokio::time::sleep(Duration::from_millis(200)).await;
        reporter
            .update_action("ファイルをコピー中", step * 25)
            .await;
    }
    reporter.stop_action().await;

    // 2. 全長不明のアクション (不定進捗)
    println!("\n--- 全長不明のアクション ---");
    reporter.start_action("サーバーに接続中").await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    reporter
        .update_action("応答を待機中", INDETERMINATE)
        .await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    reporter.stop_action().await;

    // 3. 高レベルヘルパーによるブラケット
    println!("\n--- run_reported ヘルパー ---");
    let answer = run_reported(&reporter, "計算を実行中", async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        6 * 7
    })
    .await;
    println!("計算結果: {answer}");

    // 4. 契約違反時の振る舞い (stderr に警告が出る)
    println!("\n--- 順序違反のデモ ---");
    reporter.update_action("開始前の更新", 10).await;
    reporter.start_action("アクションA").await;
    reporter.start_action("アクションB (A を置き換え)").await;
    reporter.update_action("範囲外の進捗", 150).await;
    reporter.stop_action().await;

    println!("\nデモ終了 (最終状態 idle: {})", !reporter.is_active());
}
