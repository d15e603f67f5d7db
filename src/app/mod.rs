mod events;
mod popup_state;
mod render;
mod state;

// Re-export public types
pub use popup_state::PopupState;
pub use state::App;
