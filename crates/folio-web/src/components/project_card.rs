use folio_core::Project;
use leptos::prelude::*;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let links = project.links();
    let initial = project.initial().to_string();

    view! {
        <article class="project-card">
            {match project.image_url.clone() {
                Some(url) => view! {
                    <img class="card-image" src=url alt=project.title.clone() />
                }.into_any(),
                None => view! {
                    <div class="card-placeholder">
                        <span>{initial}</span>
                    </div>
                }.into_any(),
            }}

            <div class="card-body">
                <h3 class="card-title">{project.title.clone()}</h3>
                <p class="card-description">{project.description.clone()}</p>

                <p class="card-label">"Technologies"</p>
                <div class="tech-tags">
                    {project.technologies.iter().map(|tech| view! {
                        <span class="tech-tag">{tech.clone()}</span>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <footer class="card-footer">
                {links.into_iter().map(|link| view! {
                    <a
                        class="card-action"
                        href=link.url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {link.label}
                    </a>
                }).collect::<Vec<_>>()}
            </footer>
        </article>
    }
}
