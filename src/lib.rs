pub use glint_graphics_hal as graphics_hal;
pub use glint_graphics_hal_gles2 as gles2;

pub use glint_graphics_hal::{
    Result, Uniform, UniformContext, UniformError, UniformKind, UniformOptions, UniformRegistry,
    UniformValue,
};
pub use glint_graphics_hal_gles2::{DiscoverySettings, Gles};
