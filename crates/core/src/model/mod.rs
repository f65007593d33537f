mod goal;
mod ids;
mod lesson;
mod roadmap;
mod scenario;
pub mod section;

pub use goal::{Goal, GoalDraft, GoalError, ValidatedGoal};
pub use ids::{GoalId, LessonId, ParseIdError, StepId};
pub use lesson::{Lesson, LessonDraft, LessonError};
pub use roadmap::{Roadmap, RoadmapError, RoadmapStep};
pub use scenario::{ExampleScenario, MAX_YEARS, ScenarioError};
pub use section::{
    Accordion, AccordionItem, ChartIllustration, Callout, CalloutTone, ComparisonCard,
    ComparisonSide, ExampleTable, GoalPrompt, QuoteCallout, Section, SectionError, TextBlock,
};
