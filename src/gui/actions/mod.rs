// src/gui/actions/mod.rs
//
// Button actions. Layout stays in pages/components; the work happens here.
// Remote calls go to a worker thread and come back through `App::poll`.

mod copy;
mod load;
mod write;

pub use copy::copy_table;
pub use load::refresh;
pub use write::{save, submit};
