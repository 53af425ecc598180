//! Product demo section: one reveal region for the whole section plus an
//! exclusive tab selector swapping the displayed perspective. Selecting a
//! tab never reloads data; the content mapping is fixed at construction.

use contracts::enums::DemoTab;
use contracts::shared::DemoContent;
use leptos::html::Div;
use leptos::prelude::*;

use crate::shared::data::{demo_tabs, DEMO_HIGHLIGHTS};
use crate::shared::icons::icon;
use crate::shared::reveal::use_reveal;
use crate::shared::state::TabSet;

#[component]
fn TabButton(key: DemoTab, tabs: RwSignal<TabSet<DemoTab, DemoContent>>) -> impl IntoView {
    let select = move |_| {
        tabs.update(|t| {
            // Unreachable for a statically-typed key, but the selector's
            // contract is to reject rather than corrupt state.
            if let Err(err) = t.select(key) {
                log::warn!("tab selection ignored: {err}");
            }
        });
    };

    view! {
        <button
            class="tab-button"
            class=("tab-button--active", move || tabs.with(|t| t.is_active(key)))
            on:click=select
        >
            {key.display_name()}
        </button>
    }
}

#[component]
pub fn Demo() -> impl IntoView {
    let section_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(section_ref);

    let tabs = RwSignal::new(demo_tabs());
    let active_key = Memo::new(move |_| tabs.with(|t| t.active_key()));
    let active_content = Memo::new(move |_| tabs.with(|t| t.active_content().clone()));

    view! {
        <section id="demo" class="section demo">
            <div node_ref=section_ref class="container">
                <div class="section__intro">
                    <h2
                        class="section-title reveal-fade"
                        class=("reveal-fade--shown", move || revealed.get())
                    >
                        "See Perf Analysis in Action"
                    </h2>
                    <p
                        class="section__lead reveal-fade"
                        class=("reveal-fade--shown", move || revealed.get())
                        style="animation-delay: 0.2s;"
                    >
                        "Explore how our platform works from different perspectives."
                    </p>
                </div>

                <div
                    class="demo__tabs reveal-fade"
                    class=("reveal-fade--shown", move || revealed.get())
                    style="animation-delay: 0.3s;"
                >
                    {DemoTab::all()
                        .into_iter()
                        .map(|key| view! { <TabButton key=key tabs=tabs /> })
                        .collect_view()}
                </div>

                <div
                    class="demo__content reveal-fade"
                    class=("reveal-fade--shown", move || revealed.get())
                    style="animation-delay: 0.4s;"
                >
                    <div class="demo__media">
                        <div class=move || {
                            format!("demo-frame demo-frame--{}", active_key.get().code())
                        }>
                            <div class="demo-frame__screen">
                                <button class="demo-frame__play" aria-label="Play demo video"></button>
                                <img
                                    src=move || active_content.get().image
                                    alt=move || active_content.get().title
                                />
                            </div>
                        </div>
                    </div>

                    <div class="demo__details">
                        <h3 class="accent">{move || active_content.get().title}</h3>
                        <p>{move || active_content.get().description}</p>

                        <ul class="demo__highlights">
                            {DEMO_HIGHLIGHTS
                                .into_iter()
                                .map(|highlight| {
                                    view! {
                                        <li>
                                            <span class="demo__check">{icon("check")}</span>
                                            <span>{highlight}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>

                        <button class="button button--primary">"Request Full Demo"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
