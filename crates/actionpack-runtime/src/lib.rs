pub mod dispatch;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use dispatch::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use runner::ActionRunner;
