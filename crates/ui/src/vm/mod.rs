mod goal_vm;
mod lesson_vm;
mod markdown_vm;
mod roadmap_vm;
mod section_vm;

pub use goal_vm::{GoalFormVm, GoalVm, NoticeVm, map_goals};
pub use lesson_vm::{LessonPageVm, NextVm, map_lesson_page};
pub use markdown_vm::{escape_text, markdown_to_html, sanitize_html};
pub use roadmap_vm::{RoadmapStepVm, RoadmapVm, map_roadmap};
pub use section_vm::{
    AccordionItemVm, BarVm, ChartBody, ChartVm, ComparisonVm, GoalPromptVm, SectionContext,
    SectionVm, SideVm, TableVm, map_chart, map_section,
};
