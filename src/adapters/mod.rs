// Adapters layer: concrete implementations for external systems (http, files, stdin, storage)

pub mod file;
pub mod http;
pub mod prompt;
pub mod retry;
pub mod storage;

pub use file::FileSource;
pub use http::{ApiSettings, ApiSource};
pub use prompt::{FixedName, StdinPrompt};
pub use retry::{PromptedSource, RetryPolicy, RetryingSource};
pub use storage::LocalStorage;
