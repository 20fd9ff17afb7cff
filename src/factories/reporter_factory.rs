//! StatusReporterFactory - ステータス報告の Factory Pattern 実装

use super::{ComponentConfig, ComponentFactory};
use crate::core::ActionStatusReporter;
use crate::services::{
    ConsoleStatusReporter, InMemoryStatusReporter, NoOpStatusReporter, TracingStatusReporter,
};
use anyhow::Result;

pub struct StatusReporterFactory;

impl StatusReporterFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusReporterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFactory<Box<dyn ActionStatusReporter>> for StatusReporterFactory {
    fn create(&self, config: &ComponentConfig) -> Result<Box<dyn ActionStatusReporter>> {
        match config.implementation.as_str() {
            "console" => {
                let quiet = config
                    .parameters
                    .get("quiet")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);

                let reporter = if quiet {
                    ConsoleStatusReporter::quiet()
                } else {
                    ConsoleStatusReporter::new()
                };

                Ok(Box::new(reporter))
            }
            "noop" => Ok(Box::new(NoOpStatusReporter::new())),
            "tracing" => Ok(Box::new(TracingStatusReporter::new())),
            "memory" => Ok(Box::new(InMemoryStatusReporter::new())),
            _ => anyhow::bail!(
                "未サポートのActionStatusReporter実装: {}. 利用可能: console, noop, tracing, memory",
                config.implementation
            ),
        }
    }

    fn available_implementations(&self) -> Vec<String> {
        vec![
            "console".to_string(),
            "noop".to_string(),
            "tracing".to_string(),
            "memory".to_string(),
        ]
    }

    fn get_description(&self, implementation: &str) -> Option<String> {
        match implementation {
            "console" => Some("コンソール出力によるステータス報告".to_string()),
            "noop" => Some("何もしないステータス報告 (テスト・ベンチマーク用)".to_string()),
            "tracing" => Some("tracing ファサードへのステータス報告".to_string()),
            "memory" => Some("メモリ内記録によるステータス報告 (テスト用)".to_string()),
            _ => None,
        }
    }
}

// ChannelStatusReporter は受信側をペアで返す必要があるため、
// このファクトリーからは作成できない (ChannelStatusReporter::channel を直接使用)
