//! Data models for flatview
//!
//! UI-independent data structures: commits, parsed Flat commit messages,
//! the shareable link that persists the selection, and file previews.

mod commit;
mod flat_message;
mod link;
mod notification;
mod preview;

pub use commit::{Commit, SHORT_SHA_LEN, short_sha};
pub use flat_message::{FlatFile, FlatMessage};
pub use link::{DEFAULT_BASE_URL, FlatLink, LinkError, RepoRef};
pub use notification::{Notification, NotificationKind};
pub use preview::{FilePreview, format_delta};
