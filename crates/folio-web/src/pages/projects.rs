use crate::components::project_card::ProjectCard;
use folio_core::{ProjectList, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let site = SiteConfig::default();
    let showcase = ProjectList::showcase();

    view! {
        <div class="page projects-page">
            <div class="page-header">
                <h1>{site.tagline}</h1>
                <p>
                    "A collection of projects I've built. Each one represents a \
                     learning journey and a problem solved."
                </p>
            </div>

            <div class="project-grid">
                {showcase.projects().iter().cloned().map(|project| view! {
                    <ProjectCard project=project />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
