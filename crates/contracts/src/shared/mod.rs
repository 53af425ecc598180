pub mod content;

pub use content::{ContactSubmission, DemoContent, Feature, Objective, SocialLink};
