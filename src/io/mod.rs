mod cursor;

pub use cursor::{MemCursor, SeekWhence};
