pub mod config;
pub mod constants;
pub mod field;
pub mod particles;
pub mod rain;
pub mod scroll;

pub use config::*;
pub use field::*;
pub use particles::*;
pub use rain::*;
pub use scroll::*;
