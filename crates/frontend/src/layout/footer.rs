use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div>
                    <a href="#" class="footer__brand">
                        <span class="accent">"Perf"</span>
                        "Analysis"
                    </a>
                    <p class="footer__tagline">"AI-Powered Sports Performance Analytics"</p>
                </div>
                <div class="footer__copyright">
                    {format!("© {year} Perf Analysis. All rights reserved.")}
                </div>
            </div>
        </footer>
    }
}
