// action_status - アクションステータス報告ライブラリ
//
// 長時間実行されるアクションのライフサイクル (開始・進捗・終了) を
// 観測者へ通知するための契約と、その出荷実装一式を提供する。
//
// レイヤー構成:
// - core: 契約トレイト、型付き語彙、エラー、状態トラッカー
// - services: 出荷されるレポーター実装 (console / tracing / memory / channel)
// - factories: 設定値駆動のレポーター作成
// - api: 呼び出し側の高レベルヘルパー

pub mod api;
pub mod core;
pub mod factories;
pub mod services;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use crate::api::run_reported;
pub use crate::core::{
    ActionState, ActionStatusReporter, MockActionStatusReporter, Progress, StatusError,
    StatusEvent, StatusResult, StatusSnapshot, StatusTracker, INDETERMINATE,
};
pub use crate::factories::{ComponentConfig, ComponentFactory, StatusReporterFactory};
pub use crate::services::{
    ChannelStatusReporter, ConsoleStatusReporter, InMemoryStatusReporter, NoOpStatusReporter,
    TracingStatusReporter,
};
