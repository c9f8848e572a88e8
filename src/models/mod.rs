pub mod raw;
pub mod rejection;
pub mod schema;
pub mod session;

pub use raw::RawRow;
pub use rejection::{RejectReason, Rejection};
pub use schema::{ColumnMap, InputSchema};
pub use session::SessionRecord;
