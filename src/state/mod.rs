pub mod session;
pub mod share;
pub mod storage;

pub use session::{boot, BootSources};
pub use storage::Settings;
