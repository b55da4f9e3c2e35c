pub mod sprint_composer;
pub mod sprint_draft;
pub mod sprint_name;
