pub mod apply;
pub mod export;
pub mod init;
pub mod show;
pub mod tools;

pub use apply::{apply, ApplyArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use show::{show, ShowArgs};
pub use tools::{tools, ToolsArgs};
