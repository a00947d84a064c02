//! Service module

mod completion;
mod counseling;

pub use completion::{CompletionClient, OpenRouterClient};
pub use counseling::{CounselingService, INTENSITY_RANGE};
