pub mod data;
pub mod icons;
pub mod reveal;
pub mod state;
