//! DOM-free section state: the one-shot reveal latch and the exclusive
//! tab selector. Everything here is plain Rust so it can be unit-tested
//! without a browser.

pub mod reveal;
pub mod tabs;

pub use reveal::{
    Delivery, ManualViewport, RegionId, RevealController, RevealError, RevealHandle, RevealLatch,
};
pub use tabs::{TabError, TabSet};
