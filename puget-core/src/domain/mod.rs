mod live;
mod prediction;
mod reference;
mod schedule;

pub use live::*;
pub use prediction::*;
pub use reference::*;
pub use schedule::*;
