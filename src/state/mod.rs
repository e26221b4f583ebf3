mod hint_state;
mod listeners;
mod navigator;
mod path_model;

pub use hint_state::HintState;
pub use listeners::ListenerId;
pub use navigator::NavigatorController;
pub use path_model::{PathModel, ROOT};
