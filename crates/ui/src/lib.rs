pub mod render;
pub mod views;
pub mod vm;

pub use render::{render_goal_page, render_lesson_page, render_not_found, render_roadmap_page};
