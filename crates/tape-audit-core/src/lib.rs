pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod model;
pub mod patterns;
pub mod progress;
pub mod reconciler;
pub mod report;

pub use config::AppConfig;
pub use engine::{AuditEngine, AuditResult};
pub use error::Error;
pub use model::{FolderRecord, FolderType, ReconciledRow, ReferenceShow, Statistics};
pub use progress::{ProgressReporter, SilentReporter};
