pub mod error;
pub mod extract;
pub mod lock;
pub mod map;
pub mod util;

pub use error::{ExtractError, Result};
pub use extract::{extract_and_remove, try_extract_and_remove, RemoveAndProcess};
pub use lock::{extract_and_remove_locked, extract_and_remove_write};
pub use map::SequentialMap;
