// ステータス報告専用のカスタムエラー型定義
// トレイト自体は値を返さないため、このエラーは契約を強化する実装側で使用する

use thiserror::Error;

/// ステータス報告固有のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("進捗値が範囲外です: {value} (有効範囲: -1 または 0..=100)")]
    ProgressOutOfRange { value: i32 },

    #[error("アクティブなアクションがありません: {operation} は start_action の後に呼び出してください")]
    NoActiveAction { operation: &'static str },

    #[error("アクションが既にアクティブです: \"{current}\"")]
    ActionAlreadyActive { current: String },
}

impl StatusError {
    /// 進捗範囲外エラーの作成
    pub fn progress_out_of_range(value: i32) -> Self {
        Self::ProgressOutOfRange { value }
    }

    /// アクション未開始エラーの作成
    pub fn no_active_action(operation: &'static str) -> Self {
        Self::NoActiveAction { operation }
    }

    /// アクション重複開始エラーの作成
    pub fn action_already_active(current: impl Into<String>) -> Self {
        Self::ActionAlreadyActive {
            current: current.into(),
        }
    }

    /// 呼び出し順序違反かどうかを判定
    /// (値の範囲エラーと区別して、契約ウィンドウ外の呼び出しを分類する)
    pub fn is_ordering_violation(&self) -> bool {
        matches!(
            self,
            Self::NoActiveAction { .. } | Self::ActionAlreadyActive { .. }
        )
    }
}

/// ステータス報告の結果型
pub type StatusResult<T> = std::result::Result<T, StatusError>;
