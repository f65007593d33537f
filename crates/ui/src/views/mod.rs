mod chart;
mod goal;
mod lesson;
mod not_found;
mod roadmap;
mod sections;

pub use chart::{ChartView, ChartViewProps};
pub use goal::{GoalForm, GoalFormProps, GoalPageView, GoalPageViewProps};
pub use lesson::{LessonView, LessonViewProps};
pub use not_found::{NotFoundView, NotFoundViewProps};
pub use roadmap::{RoadmapView, RoadmapViewProps};
pub use sections::{SectionView, SectionViewProps};

#[cfg(test)]
mod view_smoke;
