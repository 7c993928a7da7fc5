pub mod pointer;
pub mod resize;
pub mod scroll;

pub use pointer::wire_pointer_tracking;
pub use resize::{wire_debounced_resize, Debouncer};
pub use scroll::wire_scroll;
