//! Turns a render tree into a flat, backend-agnostic paint command list
//! (§6). Depends on `layout` for geometry and on `selection` for turning a
//! selection into highlight rects; never reaches back into either crate's
//! internals beyond their public surface.

mod command;
mod emit;
mod selection_paint;

pub use command::PaintCommand;
pub use emit::emit_frame;
pub use selection_paint::emit_selection_highlight;
