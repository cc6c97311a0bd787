//! Wire and domain types shared by the pipeline, client and server.

mod part;
mod reply;
mod upload;

pub use part::{ContentPart, InlineData};
pub use reply::ChatReply;
pub use upload::{FileSource, UploadedFile};
