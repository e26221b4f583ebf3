mod mode;

pub use mode::{CommitTrigger, DisplayMode};
