pub mod demo_tab;

pub use demo_tab::DemoTab;
