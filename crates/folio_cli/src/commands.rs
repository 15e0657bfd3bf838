//! Subcommand implementations.

use crate::cli::WorkArgs;
use folio_core::icons::TechIcon;
use folio_core::search::tags::search_tags;
use folio_core::sitemap::{build_sitemap, render_xml};
use folio_core::{
    CatalogResult, CategoryId, ContentRepository, CreationsPage, DisplayItem, FilterOutcome,
    MusicPage, RecordingUrlWriter, SiteConfig, WorkPage,
};
use std::time::Instant;

pub fn run_work<C: ContentRepository>(catalog: &C, config: &SiteConfig, args: &WorkArgs) {
    let start = Instant::now();
    let mut page = WorkPage::mount(
        catalog.projects(),
        &args.query,
        RecordingUrlWriter::default(),
        config.url_debounce(),
    );
    if args.clear {
        page.clear_selection(start);
    }
    for tag in &args.toggle {
        page.toggle_tag(tag, start);
    }
    for tag in &args.select {
        page.select_tag(tag, start);
    }
    page.tick(start + config.url_debounce());

    let view = page.view();
    let mut pills = vec![pill("All", view.all_active)];
    pills.extend(view.pills.iter().map(|tag| pill(tag.label, tag.active)));
    println!("filters: {}", pills.join(" "));
    println!("url: {}", display_query(page.current_query()));

    match &view.outcome {
        FilterOutcome::Matches(projects) => {
            for project in projects {
                println!(
                    "- {} ({}) [{}]",
                    card_heading(*project),
                    project.route(),
                    project.labels().join(", ")
                );
            }
        }
        FilterOutcome::Empty(state) => println!("{}", state.title),
    }
}

pub fn run_project<C: ContentRepository>(catalog: &C, slug: &str) -> CatalogResult<()> {
    let project = catalog.project(slug)?;
    println!("{}", project.title);
    println!("{}", project.detail_text());
    println!("tags: {}", project.tags.join(", "));
    if !project.tools.is_empty() {
        println!("tools: {}", project.tools.join(", "));
    }
    for (label, url) in [("live", &project.live_url), ("repo", &project.repo_url)] {
        if let Some(url) = url {
            println!("{label}: {url}");
        }
    }
    Ok(())
}

pub fn run_creations<C: ContentRepository>(catalog: &C, config: &SiteConfig, category: &str) {
    let start = Instant::now();
    let mut page = CreationsPage::mount(catalog.creations(), config.transition());
    page.select_category(CategoryId::parse(category), start);
    page.tick(start + config.transition());

    let view = page.view();
    let tabs = view
        .tabs
        .iter()
        .map(|tab| pill(&format!("{} ({})", tab.meta.label, tab.meta.count), tab.active))
        .collect::<Vec<_>>();
    println!("categories: {}", tabs.join(" "));

    match &view.outcome {
        FilterOutcome::Matches(items) => {
            for item in items {
                let badges = item.tech_badges(folio_core::service::creations::CARD_TECH_BADGES);
                let mut tech = badges.shown.join(", ");
                if badges.overflow > 0 {
                    tech.push_str(&format!(" +{}", badges.overflow));
                }
                let heading = card_heading(*item);
                match item.primary_link() {
                    Some(link) => println!("- {heading} [{tech}] {link}"),
                    None => println!("- {heading} [{tech}]"),
                }
            }
        }
        FilterOutcome::Empty(state) => {
            println!("{}", state.title);
            if let Some(detail) = state.detail {
                println!("{detail}");
            }
        }
    }
}

pub fn run_music<C: ContentRepository>(catalog: &C, play: Option<&str>) -> CatalogResult<()> {
    let mut page = MusicPage::mount(catalog.tracks());
    if let Some(id) = play {
        page.play(id)?;
    }
    let view = page.view();
    println!("{} tracks, {}", view.tracks.len(), view.total_duration);
    for track in view.tracks {
        let marker = if view.current.is_some_and(|current| current.id == track.id) {
            ">"
        } else {
            " "
        };
        println!(
            "{marker} {} - {} ({})",
            track.title,
            track.artist,
            track.formatted_duration()
        );
    }
    Ok(())
}

pub fn run_tags<C: ContentRepository>(catalog: &C, query: &str) {
    let tags = catalog.project_tags();
    let result = search_tags(&tags, query);
    for tag in &result.matches {
        println!("{tag}");
    }
    if let Some(message) = result.empty_message {
        println!("{message}");
    }
}

pub fn run_sitemap<C: ContentRepository>(catalog: &C, config: &SiteConfig, xml: bool) {
    let entries = build_sitemap(&config.site_url, catalog.projects());
    if xml {
        print!("{}", render_xml(&entries));
        return;
    }
    for entry in entries {
        println!(
            "{} {} {:.1}",
            entry.url,
            entry.change_frequency.as_str(),
            entry.priority
        );
    }
}

pub fn run_about<C: ContentRepository>(catalog: &C) {
    let profile = catalog.profile();
    println!("{} - {}", profile.name, profile.title);
    println!("{}", profile.hero_description);
    println!("{} | {}", profile.location, profile.mailto());
    if !profile.about_intro.is_empty() {
        println!();
        println!("{}", profile.about_intro);
    }
    for entry in &profile.timeline {
        println!("{}  {}: {}", entry.year, entry.title, entry.description);
    }
    for (platform, url) in profile.social_links() {
        println!("{platform}: {url}");
    }

    let mut tech = catalog
        .projects()
        .iter()
        .flat_map(|project| project.tools.iter())
        .map(|tool| format!("{tool} ({})", TechIcon::for_name(tool).slug()))
        .collect::<Vec<_>>();
    tech.sort();
    tech.dedup();
    println!("tech: {}", tech.join(", "));
}

/// `Title: description` line for a listing card; bare title when the
/// description is blank.
fn card_heading<T: DisplayItem>(item: &T) -> String {
    let description = item.description().trim();
    if description.is_empty() {
        item.title().to_string()
    } else {
        format!("{}: {description}", item.title())
    }
}

fn pill(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn display_query(query: &str) -> &str {
    if query.is_empty() {
        "(none)"
    } else {
        query
    }
}

#[cfg(test)]
mod tests {
    use super::{card_heading, pill};
    use folio_core::{CreationCategory, CreationItem, Project};

    #[test]
    fn card_heading_uses_title_and_description() {
        let project = Project::new("demo", "Demo", "Short pitch", &["React"]);
        assert_eq!(card_heading(&project), "Demo: Short pitch");

        let creation = CreationItem {
            id: "wave".to_string(),
            title: "Wave".to_string(),
            description: "  ".to_string(),
            category: CreationCategory::Animations,
            technology: Vec::new(),
            thumbnail: "/wave.png".to_string(),
            href: None,
            code_sandbox_url: None,
        };
        assert_eq!(card_heading(&creation), "Wave");
    }

    #[test]
    fn active_pill_is_bracketed() {
        assert_eq!(pill("React", true), "[React]");
        assert_eq!(pill("React", false), "React");
    }
}
