//! Site header: brand, desktop nav, and the slide-in mobile menu

use folio_core::{MenuState, Route, SiteConfig};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Header() -> impl IntoView {
    let site = SiteConfig::default();
    let location = use_location();
    let pathname = location.pathname;

    let menu = RwSignal::new(MenuState::new());
    let open = move || menu.get().is_open();
    let toggle_menu = move |_| menu.update(|m| m.toggle());
    let close_menu = move |_| menu.update(|m| m.close());

    view! {
        <header class="header">
            <nav class="header-inner">
                <a class="brand" href="/" on:click=close_menu>
                    {site.owner}
                </a>

                <div class="desktop-nav">
                    {Route::all().iter().map(|route| {
                        let route = *route;
                        view! {
                            <a
                                href=route.href()
                                class=move || if route.is_active(&pathname.get()) {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            >
                                {route.label()}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <button
                    class="hamburger"
                    on:click=toggle_menu
                    aria-label="Toggle menu"
                    aria-expanded=move || open().to_string()
                >
                    <span class=move || if open() { "bar top open" } else { "bar top" }></span>
                    <span class=move || if open() { "bar mid open" } else { "bar mid" }></span>
                    <span class=move || if open() { "bar bottom open" } else { "bar bottom" }></span>
                </button>
            </nav>

            <div
                class=move || if open() { "menu-overlay visible" } else { "menu-overlay" }
                on:click=close_menu
            ></div>

            <div class=move || if open() { "menu-panel open" } else { "menu-panel" }>
                <div class="menu-panel-header">
                    <h2>"Menu"</h2>
                    <button class="menu-close" on:click=close_menu aria-label="Close menu">
                        "\u{2715}"
                    </button>
                </div>
                <nav class="menu-links">
                    {Route::all().iter().map(|route| {
                        let route = *route;
                        view! {
                            <a
                                href=route.href()
                                on:click=close_menu
                                class=move || if route.is_active(&pathname.get()) {
                                    "menu-link active"
                                } else {
                                    "menu-link"
                                }
                            >
                                {route.label()}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
