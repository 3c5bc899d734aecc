//! Domain values - secret record payloads and user references.

mod record;

mod user;

pub use record::{Card, Login, RecordPayload, RecordType};
pub use user::UserRef;
