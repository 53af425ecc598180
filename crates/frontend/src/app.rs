use crate::pages::landing::LandingPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LandingPage />
    }
}
