mod directory;
mod filesystem;
mod hint;
mod memory;
pub mod worker;

pub use directory::read_directory;
pub use filesystem::{DirEntry, FileSystem, Listing, LocalFileSystem};
pub use hint::HintResolver;
pub use memory::MemoryFileSystem;
pub use worker::{spawn_hint_worker, HintRequest, HintResponse};
