//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`dom`] - Window, localStorage, media query and clock access
//! - [`PreferenceStorage`] - Key-value persistence ([`BrowserStorage`], [`MemoryStorage`])
//! - [`AnimationFrameLoop`] - `requestAnimationFrame` loop released on drop

pub mod dom;
mod frame_loop;
mod storage;

pub use frame_loop::AnimationFrameLoop;
pub use storage::{BrowserStorage, MemoryStorage, PreferenceStorage};
