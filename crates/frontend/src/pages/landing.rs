//! The landing page: an ordered composition of independent sections.
//! Sections do not communicate with each other; each owns its own reveal
//! region (and, for the demo, its own tab set).

use leptos::prelude::*;

use crate::layout::{Footer, Navbar};
use crate::sections::{Contact, Demo, Features, Hero, Objectives};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar />
            <main>
                <Hero />
                <Objectives />
                <Features />
                <Demo />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
