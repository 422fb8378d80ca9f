//! User interface - menus and the in-game HUD.

mod hud;
mod plugin;

pub use hud::{level_label, lives_label, score_label, HudRoot};
pub use plugin::{MenuAction, MenuButton, UiPlugin};
