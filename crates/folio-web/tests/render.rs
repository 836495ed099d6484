#![cfg(target_arch = "wasm32")]

use folio_core::{Project, ProjectList};
use folio_web::components::project_card::ProjectCard;
use folio_web::pages::projects::ProjectsPage;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Tests share one page; reset the body so counts do not bleed across tests.
fn reset_body() {
    document().body().unwrap().set_inner_html("");
}

#[wasm_bindgen_test]
fn projects_page_renders_one_card_per_record() {
    reset_body();
    leptos::mount::mount_to_body(ProjectsPage);

    let cards = document().query_selector_all(".project-card").unwrap();
    assert_eq!(cards.length() as usize, ProjectList::showcase().len());
}

#[wasm_bindgen_test]
fn card_without_live_url_renders_github_action_only() {
    let project = Project {
        id: 42,
        title: "Link Test".to_string(),
        description: "GitHub link only".to_string(),
        technologies: vec!["Rust".to_string()],
        github_url: Some("https://github.com/t/t".to_string()),
        live_url: None,
        image_url: None,
    };

    reset_body();
    leptos::mount::mount_to_body(move || view! { <ProjectCard project=project /> });

    let actions = document().query_selector_all(".card-action").unwrap();
    assert_eq!(actions.length(), 1);
    let label = actions.get(0).unwrap().text_content().unwrap();
    assert_eq!(label, "GitHub");
}
