mod open_state;
mod settings;
mod theme;

pub use open_state::OpenState;
pub use settings::DemoSettings;
pub use theme::Theme;
