pub mod header;
pub mod project_card;
