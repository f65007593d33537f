//! Static export: the roadmap as `index.html`, lessons under `lessons/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lesson_core::navigation::NavigationContext;
use services::{LessonCatalog, LessonService, SiteLinks};

pub const INDEX_FILE: &str = "index.html";
pub const LESSONS_DIR: &str = "lessons";

/// Files written by `build_site`.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub index: PathBuf,
    pub lessons: Vec<PathBuf>,
}

/// Render every lesson and the roadmap into `out`.
///
/// Pages are written without a navigation token; the roadmap's own links
/// add one per step.
///
/// # Errors
///
/// Returns an I/O error if a directory or file cannot be written.
pub fn build_site(catalog: Arc<LessonCatalog>, out: &Path) -> io::Result<BuildReport> {
    let service = LessonService::new(catalog, SiteLinks::static_export());
    let lessons_dir = out.join(LESSONS_DIR);
    fs::create_dir_all(&lessons_dir)?;

    let index = out.join(INDEX_FILE);
    let roadmap = service.roadmap_page(&NavigationContext::none());
    fs::write(&index, ui::render_roadmap_page(&roadmap))?;

    let mut report = BuildReport {
        index,
        lessons: Vec::with_capacity(service.catalog().lessons().len()),
    };

    for lesson in service.catalog().lessons() {
        let id = lesson.id().as_str();
        let page = service
            .page(id, NavigationContext::none())
            .map_err(io::Error::other)?;
        let path = lessons_dir.join(format!("{id}.html"));
        fs::write(&path, ui::render_lesson_page(&page))?;
        tracing::debug!(path = %path.display(), "wrote lesson");
        report.lessons.push(path);
    }

    tracing::info!(
        out = %out.display(),
        lessons = report.lessons.len(),
        "static site built"
    );
    Ok(report)
}

/// Render one lesson the way the server would, for `lessons render`.
///
/// # Errors
///
/// Returns `LessonServiceError::NotFound` for an unknown id.
pub fn render_lesson(
    catalog: Arc<LessonCatalog>,
    id: &str,
    from: Option<&str>,
) -> Result<String, services::LessonServiceError> {
    let service = LessonService::new(catalog, SiteLinks::served());
    let page = service.page(id, NavigationContext::from_token(from))?;
    Ok(ui::render_lesson_page(&page))
}
