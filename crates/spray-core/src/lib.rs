pub mod caps;
pub mod constants;
pub mod controls;
pub mod export;
pub mod pixmap;
pub mod pointer;
pub mod scheduler;
pub mod session;
pub mod surface;
pub mod synth;
pub mod velocity;

pub use caps::*;
pub use constants::*;
pub use controls::*;
pub use export::*;
pub use pixmap::*;
pub use pointer::*;
pub use scheduler::*;
pub use session::*;
pub use surface::*;
pub use synth::*;
pub use velocity::*;
