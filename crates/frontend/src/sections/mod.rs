pub mod contact;
pub mod demo;
pub mod features;
pub mod hero;
pub mod objectives;

pub use contact::Contact;
pub use demo::Demo;
pub use features::Features;
pub use hero::Hero;
pub use objectives::Objectives;
