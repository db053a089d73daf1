// Domain layer: display records, content tables, the render tree type and ports.

pub mod content;
pub mod model;
pub mod node;
pub mod ports;
