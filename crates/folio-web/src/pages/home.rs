use folio_core::{Route, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = SiteConfig::default();

    view! {
        <div class="page home-page">
            <h1 class="hero-title">{site.owner}</h1>
            <p class="hero-about">{site.about}</p>
            <a class="hero-cta" href=Route::Projects.href()>
                "View My Projects"
            </a>
        </div>
    }
}
