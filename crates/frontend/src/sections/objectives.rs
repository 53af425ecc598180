//! Mission section: a revealed heading plus four objective cards, each
//! with its own reveal region and a cascading transition delay.

use contracts::shared::Objective;
use leptos::html::Div;
use leptos::prelude::*;

use crate::shared::data::objectives;
use crate::shared::icons::icon;
use crate::shared::reveal::use_reveal;

#[component]
fn ObjectiveCard(objective: Objective) -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(card_ref);

    view! {
        <div
            node_ref=card_ref
            class="objective-card reveal-rise"
            class=("reveal-rise--shown", move || revealed.get())
            style=format!("transition-delay: {}ms;", objective.delay_ms)
        >
            <div class="objective-card__icon">{icon(&objective.icon)}</div>
            <h3>{objective.title}</h3>
            <p>{objective.description}</p>
        </div>
    }
}

#[component]
pub fn Objectives() -> impl IntoView {
    let heading_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(heading_ref);

    view! {
        <section id="about" class="section objectives">
            <div class="container">
                <div node_ref=heading_ref class="section__intro">
                    <h2
                        class="section-title reveal-fade"
                        class=("reveal-fade--shown", move || revealed.get())
                    >
                        "Our Mission"
                    </h2>
                    <p
                        class="section__lead reveal-fade"
                        class=("reveal-fade--shown", move || revealed.get())
                        style="animation-delay: 0.2s;"
                    >
                        "We're democratizing sports analytics by combining AI and real-time \
                         statistics, making professional-level insights accessible to athletes \
                         and teams at every level."
                    </p>
                </div>

                <div class="objectives__grid">
                    {objectives()
                        .into_iter()
                        .map(|objective| view! { <ObjectiveCard objective=objective /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
