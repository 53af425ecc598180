//! Fixed top navigation.
//!
//! Styling is driven by two flags: `scrolled` (window has moved past 50px,
//! navbar gets a solid backdrop) and the mobile menu toggle. Both are
//! plain presentation state; neither participates in the reveal latching.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::data::NAV_LINKS;
use crate::shared::icons::icon;

const SCROLL_SOLID_AFTER_PX: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let listener: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>> =
        Rc::new(RefCell::new(None));

    Effect::new({
        let listener = Rc::clone(&listener);
        move || {
            if listener.borrow().is_some() {
                return;
            }
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                set_scrolled.set(y > SCROLL_SOLID_AFTER_PX);
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
            *listener.borrow_mut() = Some(closure);
        }
    });

    // `on_cleanup` demands `Send + Sync`; the listener never leaves the
    // single wasm thread, so a `SendWrapper` satisfies the bound.
    let listener_cleanup = send_wrapper::SendWrapper::new(listener);
    on_cleanup(move || {
        let listener = listener_cleanup.take();
        let taken = listener.borrow_mut().take();
        if let Some(closure) = taken {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }
    });

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <nav class="navbar" class=("navbar--solid", move || scrolled.get())>
            <div class="container navbar__inner">
                <a href="#" class="navbar__brand">
                    <span class="accent">"Perf"</span>
                    "Analysis"
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="navbar__link">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <button class="navbar__toggle" on:click=toggle_menu aria-label="Toggle menu">
                    {move || icon(if menu_open.get() { "x" } else { "menu" })}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="navbar__mobile-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
