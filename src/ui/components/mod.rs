//! Building blocks shared by views and widgets

mod blocks;
mod empty_state;
mod message;

pub use blocks::{bordered_block, bordered_block_with_notification, titled_block};
pub use empty_state::{empty_state, loading_state};
pub use message::{build_error_line, build_notification_title};
