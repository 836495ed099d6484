// Domain modules
pub mod error;
pub mod nav;
pub mod project;
pub mod route;
pub mod site;

pub use error::{FolioError, Result};
pub use nav::MenuState;
pub use project::{Project, ProjectLink, ProjectList};
pub use route::Route;
pub use site::SiteConfig;
