//! Header text effects
//!
//! Timer chains expressed as data: scripts of timed frames played by a
//! cancellable player from the frame loop.

pub mod splash;
pub mod typewriter;

pub use splash::{SplashCycle, SplashMessage};
pub use typewriter::{Frame, HeaderScript, ScriptPlayer, TypeStep};
