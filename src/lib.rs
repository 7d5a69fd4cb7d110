pub mod generators;
pub mod level;
pub mod logging;
pub mod maze;
pub mod render;
