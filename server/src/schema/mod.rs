mod body_table;
mod drag_settings_table;
mod motion_state_table;
mod platform_table;
mod world_static_table;

pub use body_table::*;
pub use drag_settings_table::*;
pub use motion_state_table::*;
pub use platform_table::*;
pub use world_static_table::*;
