use action_status::{ActionStatusReporter, ChannelStatusReporter, StatusEvent};
use std::time::Duration;

#[tokio::main]
async fn main() {
    println!("=== チャンネルブリッジのデモ ===\n");
    println!("レポーターからのイベントを UI 役のタスクが受信して描画します\n");

    let (reporter, mut rx) = ChannelStatusReporter::channel(16);

    // UI 役の消費者タスク: 受信イベントを整形して表示
    let ui_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                StatusEvent::Started { message, at } => {
                    println!("[UI {}] ▶ {message}", at.format("%H:%M:%S%.3f"));
                }
                StatusEvent::Updated {
                    message, progress, ..
                } => {
                    println!("[UI] {message} ... {progress}");
                }
                StatusEvent::Stopped { at } => {
                    println!("[UI {}] ■ 完了", at.format("%H:%M:%S%.3f"));
                }
            }
        }
        println!("[UI] チャンネルが閉じられました");
    });

    // アクター側: 長時間アクションの進捗を報告
    reporter.start_action("アーカイブを展開中").await;
    for step in 1..=5 {
        tokio::time::sleep(Duration::from_millis(250)).await;
        reporter
            .update_action("アーカイブを展開中", step * 20)
            .await;
    }
    reporter.stop_action().await;

    // レポーターを破棄してチャンネルを閉じ、UI タスクの終了を待つ
    drop(reporter);
    ui_task.await.expect("UI タスクの終了に失敗");

    println!("\nデモ終了");
}
