// ファクトリー層 - 設定値駆動のコンポーネント作成
// 実装名と JSON パラメーターからレポーターを組み立てる

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod reporter_factory;

// 公開API
pub use reporter_factory::StatusReporterFactory;

/// 各コンポーネントの設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub implementation: String,
    pub parameters: serde_json::Value,
}

impl ComponentConfig {
    pub fn new(implementation: &str, parameters: serde_json::Value) -> Self {
        Self {
            implementation: implementation.to_string(),
            parameters,
        }
    }
}

/// 設定値からコンポーネントを作成するファクトリーの抽象化トレイト
pub trait ComponentFactory<T> {
    /// 設定からコンポーネントを作成
    fn create(&self, config: &ComponentConfig) -> Result<T>;

    /// 利用可能な実装名の一覧を取得
    fn available_implementations(&self) -> Vec<String>;

    /// 実装の説明を取得
    fn get_description(&self, implementation: &str) -> Option<String>;
}
