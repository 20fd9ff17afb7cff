// ステータス報告に関連するデータ型定義

use crate::core::error::{StatusError, StatusResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 不定進捗を表すセンチネル値 (アクションの全長が見積もれない状態)
pub const INDETERMINATE: i32 = -1;

/// 進捗値の型安全な表現
///
/// 契約上の生の整数 (`-1` または `0..=100`) を分類した結果。
/// 範囲外の値は `Progress::from_raw` で拒否されるため、
/// `Percent(p)` は常に `p <= 100` を満たす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// 全長不明 (生の値 -1)
    Indeterminate,
    /// 完了率パーセント (生の値 0..=100)
    Percent(u8),
}

impl Progress {
    /// 契約上の生の整数を分類
    pub fn from_raw(value: i32) -> StatusResult<Self> {
        match value {
            INDETERMINATE => Ok(Self::Indeterminate),
            0..=100 => Ok(Self::Percent(value as u8)),
            _ => Err(StatusError::progress_out_of_range(value)),
        }
    }

    /// 契約上の生の整数へ戻す
    pub fn as_raw(&self) -> i32 {
        match self {
            Self::Indeterminate => INDETERMINATE,
            Self::Percent(p) => i32::from(*p),
        }
    }

    /// 完了数と総数から進捗率を導出
    ///
    /// `total == 0` の場合は全長不明として扱う
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::Indeterminate;
        }
        if completed >= total {
            return Self::Percent(100);
        }
        let percentage = (completed as f64 / total as f64) * 100.0;
        Self::Percent(percentage as u8)
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Indeterminate => write!(f, "--"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// アクションのライフサイクル状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionState {
    /// アクションなし (初期状態)
    #[default]
    Idle,
    /// アクション進行中 (start_action 〜 stop_action の間)
    Active,
}

/// 観測可能なステータスのスナップショット
///
/// テストや UI がレポーターの現在状態を読み取るためのアクセサ型。
/// stop_action 後のスナップショットは `StatusSnapshot::idle()` と
/// 完全に一致する (フィールドの漏れなし)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub state: ActionState,
    pub message: Option<String>,
    pub progress: Option<Progress>,
    pub started_at: Option<DateTime<Utc>>,
}

impl StatusSnapshot {
    /// 正準的なアイドル状態
    pub fn idle() -> Self {
        Self {
            state: ActionState::Idle,
            message: None,
            progress: None,
            started_at: None,
        }
    }

    /// アイドル状態かどうか
    pub fn is_idle(&self) -> bool {
        self.state == ActionState::Idle
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

/// ステータス報告のイベント表現
///
/// 記録実装とチャンネル実装のワイヤー語彙。
/// 受理された呼び出し 1 回がイベント 1 個に対応する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusEvent {
    Started {
        message: String,
        at: DateTime<Utc>,
    },
    Updated {
        message: String,
        progress: Progress,
        at: DateTime<Utc>,
    },
    Stopped {
        at: DateTime<Utc>,
    },
}

impl StatusEvent {
    /// 現在時刻付きの開始イベントを作成
    pub fn started(message: impl Into<String>) -> Self {
        Self::Started {
            message: message.into(),
            at: Utc::now(),
        }
    }

    /// 現在時刻付きの更新イベントを作成
    pub fn updated(message: impl Into<String>, progress: Progress) -> Self {
        Self::Updated {
            message: message.into(),
            progress,
            at: Utc::now(),
        }
    }

    /// 現在時刻付きの終了イベントを作成
    pub fn stopped() -> Self {
        Self::Stopped { at: Utc::now() }
    }
}
