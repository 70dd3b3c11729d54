mod core;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingSurface, GestureState, SurfaceError};
