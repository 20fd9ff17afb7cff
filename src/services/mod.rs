// サービス層 - 出荷されるレポーター実装
// 各実装は StatusTracker を埋め込み、同一の契約違反ポリシーに従う

pub mod channel;
pub mod console;
pub mod logging;
pub mod memory;

// 公開API - 各実装を明示的にエクスポート
pub use channel::ChannelStatusReporter;
pub use console::{ConsoleStatusReporter, NoOpStatusReporter};
pub use logging::TracingStatusReporter;
pub use memory::InMemoryStatusReporter;
