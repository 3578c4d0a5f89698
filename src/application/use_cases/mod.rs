mod audit_index;
mod fetch_replay;
mod list_replays;
mod submit_replay;

pub use audit_index::{AuditError, AuditIndexUseCase, AuditReport};
pub use fetch_replay::{FetchError, FetchReplayUseCase};
pub use list_replays::{ListError, ListReplaysUseCase};
pub use submit_replay::{SubmitReplayUseCase, UploadError};
