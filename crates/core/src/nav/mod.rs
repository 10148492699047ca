pub mod controller;
pub mod observer;
pub mod resolver;
pub mod scroll_lock;

pub use controller::{MenuState, NavController};
pub use observer::{ObserverConfig, ViewportObserver};
pub use resolver::resolve_active;
pub use scroll_lock::{DocumentScroll, ScrollLockGuard};
