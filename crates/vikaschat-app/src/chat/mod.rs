// Chat session module - ordered message history and submission control
pub mod session;
pub mod transport;

pub use session::{ChatSession, SubmitOutcome};
pub use transport::{ChatTransport, HttpTransport};
