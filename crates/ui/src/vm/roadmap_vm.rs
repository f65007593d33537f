use services::RoadmapPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapStepVm {
    pub anchor: String,
    pub number: usize,
    pub title: String,
    pub lesson_title: String,
    pub href: String,
    pub current: bool,
}

impl RoadmapStepVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.current { "step current" } else { "step" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapVm {
    pub title: String,
    pub steps: Vec<RoadmapStepVm>,
}

#[must_use]
pub fn map_roadmap(page: &RoadmapPage<'_>) -> RoadmapVm {
    RoadmapVm {
        title: page.roadmap.title.clone(),
        steps: page
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RoadmapStepVm {
                anchor: entry.step.anchor().to_owned(),
                number: i + 1,
                title: entry.step.title.clone(),
                lesson_title: entry.lesson_title.to_owned(),
                href: entry.href.clone(),
                current: entry.current,
            })
            .collect(),
    }
}
