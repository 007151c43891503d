//! Platform glue shared by the components: clipboard, timers, preference storage.

pub mod clipboard;
pub mod platform;
pub mod storage;
pub mod timing;
