//! Contact section. The form performs no validation and no persistence:
//! submit echoes the payload to the console, shows a transient
//! confirmation, and resets the fields.

use contracts::shared::ContactSubmission;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::social_links;
use crate::shared::icons::icon;
use crate::shared::reveal::use_reveal;

/// How long the confirmation banner stays up
const CONFIRMATION_MS: u32 = 4000;

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(section_ref);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (newsletter, set_newsletter) = signal(false);
    let (sent, set_sent) = signal(false);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            role: role.get_untracked(),
            message: message.get_untracked(),
            newsletter: newsletter.get_untracked(),
        };
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(err) => log::warn!("contact form submitted (unserializable: {err})"),
        }

        set_name.set(String::new());
        set_email.set(String::new());
        set_role.set(String::new());
        set_message.set(String::new());
        set_newsletter.set(false);

        set_sent.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(CONFIRMATION_MS).await;
            set_sent.set(false);
        });
    };

    view! {
        <section id="contact" class="section contact">
            <div node_ref=section_ref class="container contact__grid">
                <div
                    class="contact__info reveal-slide-left"
                    class=("reveal-slide-left--shown", move || revealed.get())
                >
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section__lead">
                        "Ready to revolutionize your sports performance analytics? Reach out to \
                         learn how Perf Analysis can help you achieve peak performance."
                    </p>

                    <div class="contact__channels">
                        <div>
                            <h4>"Email Us"</h4>
                            <a href="mailto:info@perfanalysis.com" class="accent">
                                "info@perfanalysis.com"
                            </a>
                        </div>
                        <div>
                            <h4>"Follow Us"</h4>
                            <div class="contact__socials">
                                {social_links()
                                    .into_iter()
                                    .map(|link| {
                                        let label = format!("Follow us on {}", link.name);
                                        view! {
                                            <a
                                                href=link.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=label
                                                class="contact__social"
                                            >
                                                {icon(&link.name)}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="contact__cta">
                        <h4>"Ready to see the difference?"</h4>
                        <p>"Schedule a personalized demo with our team."</p>
                        <button class="button button--primary">"Book a Demo"</button>
                    </div>
                </div>

                <div
                    class="contact__form-wrap reveal-slide-right"
                    class=("reveal-slide-right--shown", move || revealed.get())
                    style="transition-delay: 0.2s;"
                >
                    <form class="contact__form" on:submit=handle_submit>
                        <Show when=move || sent.get()>
                            <div class="contact__confirmation" role="status">
                                "Message sent successfully! We'll be in touch soon."
                            </div>
                        </Show>

                        <div class="form-field">
                            <label for="name">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                required
                                placeholder="Your name"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-field">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                placeholder="your.email@example.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-field">
                            <label for="role">"Your Role"</label>
                            <select
                                id="role"
                                required
                                prop:value=role
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                            >
                                <option value="">"Select your role"</option>
                                <option value="athlete">"Athlete"</option>
                                <option value="coach">"Coach"</option>
                                <option value="club">"Sports Club"</option>
                                <option value="other">"Other"</option>
                            </select>
                        </div>

                        <div class="form-field">
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                required
                                rows=4
                                placeholder="How can we help you?"
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="form-field form-field--checkbox">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=newsletter
                                    on:change=move |ev| set_newsletter.set(event_target_checked(&ev))
                                />
                                <span>"Subscribe to our newsletter"</span>
                            </label>
                        </div>

                        <button type="submit" class="button button--primary button--block">
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
