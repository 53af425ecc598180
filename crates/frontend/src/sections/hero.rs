//! Above-the-fold hero. Always visible on load, so it animates with plain
//! CSS delays instead of a reveal region.

use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="container hero__inner">
                <div class="hero__copy">
                    <span class="hero__kicker reveal-fade reveal-fade--shown" style="animation-delay: 0.3s;">
                        "AI-Powered Sports Analytics"
                    </span>
                    <h1 class="hero__title reveal-fade reveal-fade--shown" style="animation-delay: 0.5s;">
                        "Track. " <span class="accent">"Analyze."</span> " Perform."
                    </h1>
                    <p class="hero__lead reveal-fade reveal-fade--shown" style="animation-delay: 0.7s;">
                        "Perf Analysis uses cutting-edge AI and performance metrics to elevate \
                         athletes, coaches, and teams to their peak potential."
                    </p>
                    <div class="hero__actions reveal-fade reveal-fade--shown" style="animation-delay: 0.9s;">
                        <a href="#features" class="button button--primary">"See How It Works"</a>
                        <a href="#demo" class="button button--outline">"Watch Demo"</a>
                    </div>
                </div>

                <div class="hero__visual reveal-fade reveal-fade--shown" style="animation-delay: 1.1s;">
                    <div class="hero__card">
                        <img
                            src="https://images.unsplash.com/photo-1461896836934-ffe607ba8211?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=2340&q=80"
                            alt="Athletes in action"
                        />
                        <div class="hero__card-stats">
                            <div>
                                <h3 class="accent">"Performance Score"</h3>
                                <div class="hero__score">
                                    <span class="hero__score-value">"93.7"</span>
                                    <span class="hero__score-trend">"↑ 12%"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <a href="#about" class="hero__scroll-hint" aria-label="Scroll down">
                {icon("arrow-down")}
            </a>
        </section>
    }
}
