use std::sync::Arc;

use lesson_core::model::{
    Accordion, AccordionItem, CalloutTone, ExampleScenario, GoalDraft, GoalId, LessonDraft,
    Roadmap, RoadmapStep, Section,
};
use lesson_core::navigation::NavigationContext;
use services::{LessonCatalog, LessonService, SiteLinks};

use crate::render::{render_goal_page, render_lesson_page, render_not_found, render_roadmap_page};
use crate::vm::{GoalFormVm, NoticeVm};

fn every_kind_lesson() -> LessonDraft {
    LessonDraft::new("all-kinds", "All <Kinds>")
        .summary("Every block once.")
        .section(Section::text(
            Some("Prose"),
            "Some **bold** text, [a trap](javascript:alert(1)) and <script>alert(2)</script>.",
        ))
        .section(Section::table(
            Some("Ledger"),
            ["Item", "Amount"],
            &[["Revenue", "1,000"], ["Costs", "(450)"]],
        ))
        .section(Section::Comparison(lesson_core::model::ComparisonCard {
            title: "Needs vs wants".into(),
            left: lesson_core::model::ComparisonSide {
                label: "Needs".into(),
                points: vec!["Rent".into()],
            },
            right: lesson_core::model::ComparisonSide {
                label: "Wants".into(),
                points: vec!["Concerts".into()],
            },
            verdict: None,
        }))
        .section(Section::quote("Pay yourself first.", Some("Folk wisdom")))
        .section(Section::chart(
            "Growth",
            ExampleScenario::compound_growth(10_000.0, 0.10, 10),
            None,
        ))
        .section(Section::chart(
            "Never paid off",
            ExampleScenario::loan_payoff(5_000.0, 0.21, 50.0),
            None,
        ))
        .section(Section::callout(CalloutTone::Warning, Some("Careful"), "Fees *add up*."))
        .section(Section::Accordion(Accordion {
            items: vec![AccordionItem {
                question: "Why save?".into(),
                answer: "For emergencies.".into(),
            }],
        }))
        .section(Section::goal_prompt("Make it a goal", Some("Rainy day"), Some("Savings")))
}

fn service(links: SiteLinks) -> LessonService {
    let lesson = every_kind_lesson().validate().unwrap();
    let roadmap = Roadmap {
        title: "Road".into(),
        steps: vec![
            RoadmapStep {
                id: "step-1".parse().unwrap(),
                title: "Everything".into(),
                lesson_id: "all-kinds".parse().unwrap(),
            },
            RoadmapStep {
                id: "step-2".parse().unwrap(),
                title: "Again".into(),
                lesson_id: "all-kinds".parse().unwrap(),
            },
        ],
    };
    let catalog = LessonCatalog::new(vec![lesson], roadmap).unwrap();
    LessonService::new(Arc::new(catalog), links)
}

#[test]
fn lesson_page_renders_every_section_kind() {
    let service = service(SiteLinks::served());
    let page = service
        .page("all-kinds", NavigationContext::from_token(Some("step-1")))
        .unwrap();
    let html = render_lesson_page(&page);

    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype in {html}");
    assert!(html.contains("<title>"), "missing title in {html}");
    for kind in [
        "block-text",
        "block-table",
        "block-comparison",
        "block-quote",
        "block-chart",
        "block-callout",
        "block-accordion",
        "block-goal-prompt",
    ] {
        assert!(html.contains(kind), "missing {kind} in {html}");
    }
    assert!(html.contains("<strong>bold</strong>"), "markdown not rendered in {html}");
    assert!(html.contains("<table"), "missing table in {html}");
    assert!(html.contains("<blockquote"), "missing quote in {html}");
    assert!(html.contains("<details"), "missing accordion in {html}");
    assert!(html.contains("callout-warning"), "missing callout tone in {html}");
    assert!(html.contains("$25,937"), "missing derived chart value in {html}");
    assert!(html.contains("cannot be illustrated"), "missing chart note in {html}");
    assert!(html.contains("goal-form"), "missing goal form in {html}");
}

#[test]
fn lesson_page_is_sanitized() {
    let service = service(SiteLinks::served());
    let page = service.page("all-kinds", NavigationContext::none()).unwrap();
    let html = render_lesson_page(&page);

    assert!(!html.contains("javascript:"), "unsafe link kept in {html}");
    assert!(!html.contains("<script"), "script kept in {html}");
    assert!(!html.contains("<Kinds>"), "title not escaped in {html}");
}

#[test]
fn lesson_page_echoes_navigation_token() {
    let service = service(SiteLinks::served());
    let page = service
        .page("all-kinds", NavigationContext::from_query("?from=step-1"))
        .unwrap();
    let html = render_lesson_page(&page);

    assert!(html.contains(r#"href="/?from=step-1""#), "missing return link in {html}");
    assert!(
        html.contains(r#"href="/lessons/all-kinds?from=step-2""#),
        "missing next link in {html}"
    );
    assert!(html.contains(r#"value="step-1""#), "missing hidden token in {html}");
    assert!(!html.contains("undefined") && !html.contains("null"));
}

#[test]
fn lesson_page_without_token_links_bare_roadmap() {
    let service = service(SiteLinks::served());
    let page = service.page("all-kinds", NavigationContext::none()).unwrap();
    let html = render_lesson_page(&page);

    assert!(html.contains(r#"href="/""#), "missing bare return link in {html}");
    assert!(!html.contains("from="), "unexpected token in {html}");
}

#[test]
fn static_export_replaces_goal_form_with_note() {
    let service = service(SiteLinks::static_export());
    let page = service.page("all-kinds", NavigationContext::none()).unwrap();
    let html = render_lesson_page(&page);

    assert!(!html.contains("<form"), "unexpected form in {html}");
    assert!(html.contains("Make it a goal"));
    assert!(html.contains(r#"href="../index.html""#), "missing return link in {html}");
}

#[test]
fn roadmap_marks_current_step() {
    let service = service(SiteLinks::served());
    let html = render_roadmap_page(&service.roadmap_page(&NavigationContext::from_token(Some(
        "step-2",
    ))));

    assert!(html.contains("You are here"), "missing marker in {html}");
    assert!(html.contains("step current"), "missing current class in {html}");
    assert!(
        html.contains(r#"href="/lessons/all-kinds?from=step-1""#),
        "missing step link in {html}"
    );
}

#[test]
fn goal_page_lists_goals_and_notice() {
    let goal = GoalDraft {
        target_amount: Some(1_200.0),
        ..GoalDraft::named("Trip")
    }
    .validate()
    .unwrap()
    .assign_id(GoalId::new("1"));
    let form = GoalFormVm {
        action: "/goals".into(),
        from: Some("step-3".into()),
        name: String::new(),
        category: String::new(),
        return_href: "/?from=step-3".into(),
        notice: Some(NoticeVm::save_failed()),
    };

    let html = render_goal_page(form, &[goal]);
    assert!(html.contains("Trip"), "missing goal in {html}");
    assert!(html.contains("$1,200.00"), "missing target in {html}");
    assert!(html.contains("couldn"), "missing notice in {html}");
    assert!(html.contains(r#"value="step-3""#), "missing hidden token in {html}");
}

#[test]
fn not_found_page_links_back() {
    let html = render_not_found("nope", "/");
    assert!(html.contains("Lesson not found"));
    assert!(html.contains("nope"));
    assert!(html.contains(r#"href="/""#));
}
