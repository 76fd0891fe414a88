pub mod config;
pub mod engine;
pub mod gate;
pub mod geometry;
pub mod interaction;
pub mod macros;
pub mod mount;

pub use config::{Channels, ConfigError, CursorConfig, MarkerClass, Paint};
pub use engine::{CursorEngine, ShapeSizes, Update};
pub use gate::{DeviceSignals, supports_custom_cursor};
pub use geometry::{Point, ShapeStyle};
pub use interaction::{Interaction, Trigger};
pub use mount::{ClickableKind, Host, Mount};
