//! Features grid. The heading and every card reveal independently; cards
//! stagger by index through a transition delay.

use contracts::shared::Feature;
use leptos::html::Div;
use leptos::prelude::*;

use crate::shared::data::features;
use crate::shared::icons::icon;
use crate::shared::reveal::use_reveal;

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(card_ref);

    view! {
        <div
            node_ref=card_ref
            class="feature-card reveal-rise"
            class=("reveal-rise--shown", move || revealed.get())
            style=format!("transition-delay: {}ms;", index * 100)
        >
            <div class="feature-card__icon">{icon(&feature.icon)}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let heading_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(heading_ref);

    view! {
        <section id="features" class="section features">
            <div class="container">
                <div node_ref=heading_ref class="section__intro">
                    <h2
                        class="section-title reveal-fade"
                        class=("reveal-fade--shown", move || revealed.get())
                    >
                        "Powerful Features"
                    </h2>
                    <p
                        class="section__lead reveal-fade"
                        class=("reveal-fade--shown", move || revealed.get())
                        style="animation-delay: 0.2s;"
                    >
                        "From real-time analytics to predictive insights, our platform provides \
                         everything you need to maximize performance."
                    </p>
                </div>

                <div class="features__grid">
                    {features()
                        .into_iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
