pub mod probe;
pub mod scene;
pub mod settings_ui;
pub mod spline_render;

pub use probe::*;
pub use scene::*;
pub use settings_ui::*;
pub use spline_render::*;
