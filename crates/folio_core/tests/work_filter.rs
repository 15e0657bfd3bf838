use folio_core::{
    decode_tags, encode_query, filter_items, FilterOutcome, Project, RecordingUrlWriter,
    TagSelection, WorkPage,
};
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(150);

fn scenario_projects() -> Vec<Project> {
    vec![
        Project::new("first", "First", "react only", &["React"]),
        Project::new("second", "Second", "react and ts", &["React", "TypeScript"]),
        Project::new("third", "Third", "python only", &["Python"]),
    ]
}

fn slugs(outcome: &FilterOutcome<'_, Project>) -> Vec<String> {
    outcome.items().iter().map(|project| project.slug.clone()).collect()
}

#[test]
fn react_selection_yields_first_two_in_order() {
    let projects = scenario_projects();
    let mut page = WorkPage::mount(&projects, "", RecordingUrlWriter::default(), DEBOUNCE);
    page.toggle_tag("React", Instant::now());
    assert_eq!(slugs(&page.filtered()), vec!["first", "second"]);
}

#[test]
fn python_or_typescript_yields_distinct_matches() {
    let projects = scenario_projects();
    let selection = TagSelection::from_tags(["Python", "TypeScript"]);
    let filtered = filter_items(&projects, &selection);
    let ids: Vec<&str> = filtered.iter().map(|project| project.slug.as_str()).collect();
    assert_eq!(ids, vec!["second", "third"]);

    let selection = TagSelection::from_tags(["Python", "TypeScript", "React"]);
    assert_eq!(filter_items(&projects, &selection).len(), 3);
}

#[test]
fn every_tag_filter_is_exact() {
    let projects = scenario_projects();
    for tag in ["React", "TypeScript", "Python"] {
        let selection = TagSelection::from_tags([tag]);
        let filtered = filter_items(&projects, &selection);
        assert!(filtered.iter().all(|project| project.has_tag(tag)));
        let expected = projects.iter().filter(|project| project.has_tag(tag)).count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn filtering_is_deterministic() {
    let projects = scenario_projects();
    let selection = TagSelection::from_tags(["TypeScript"]);
    assert_eq!(
        filter_items(&projects, &selection),
        filter_items(&projects, &selection)
    );
}

#[test]
fn rapid_toggles_coalesce_into_one_url_write() {
    let projects = scenario_projects();
    let start = Instant::now();
    let mut page = WorkPage::mount(&projects, "?ref=nav", RecordingUrlWriter::default(), DEBOUNCE);

    page.toggle_tag("React", start);
    page.toggle_tag("Python", start + Duration::from_millis(50));
    page.toggle_tag("TypeScript", start + Duration::from_millis(100));

    assert!(!page.tick(start + Duration::from_millis(200)));
    assert!(page.tick(start + Duration::from_millis(250)));
    assert_eq!(
        page.writer().writes,
        vec!["?ref=nav&tags=React%2CPython%2CTypeScript".to_string()]
    );
    assert!(!page.tick(start + Duration::from_secs(1)));
}

#[test]
fn clearing_removes_the_parameter() {
    let projects = scenario_projects();
    let start = Instant::now();
    let mut page = WorkPage::mount(&projects, "?tags=React", RecordingUrlWriter::default(), DEBOUNCE);

    page.select_tag("React", start);
    assert!(page.selection().is_empty());
    assert!(page.tick(start + DEBOUNCE));
    assert_eq!(page.writer().writes, vec![String::new()]);
    assert_eq!(page.current_query(), "");
}

#[test]
fn toggling_back_to_the_mounted_state_skips_the_write() {
    let projects = scenario_projects();
    let start = Instant::now();
    let mut page = WorkPage::mount(&projects, "", RecordingUrlWriter::default(), DEBOUNCE);

    page.select_tag("Python", start);
    page.select_tag("Python", start + Duration::from_millis(10));
    assert!(page.has_pending_url_write());
    assert!(!page.tick(start + Duration::from_millis(500)));
    assert!(page.writer().writes.is_empty());
}

#[test]
fn raw_comma_query_toggled_back_skips_the_write() {
    let projects = scenario_projects();
    let start = Instant::now();
    let mut page = WorkPage::mount(
        &projects,
        "?tags=React,Python",
        RecordingUrlWriter::default(),
        DEBOUNCE,
    );

    page.toggle_tag("Python", start);
    page.toggle_tag("Python", start + Duration::from_millis(20));
    assert!(page.has_pending_url_write());
    assert!(!page.tick(start + Duration::from_millis(500)));
    assert!(page.writer().writes.is_empty());
    assert_eq!(page.current_query(), "?tags=React%2CPython");
}

#[test]
fn query_without_question_mark_toggled_back_skips_the_write() {
    let projects = scenario_projects();
    let start = Instant::now();
    let mut page = WorkPage::mount(&projects, "tags=Python", RecordingUrlWriter::default(), DEBOUNCE);

    page.select_tag("React", start);
    page.select_tag("Python", start + Duration::from_millis(20));
    assert!(!page.tick(start + Duration::from_millis(500)));
    assert!(page.writer().writes.is_empty());
}

#[test]
fn unmount_cancels_pending_write() {
    let projects = scenario_projects();
    let start = Instant::now();
    let mut page = WorkPage::mount(&projects, "", RecordingUrlWriter::default(), DEBOUNCE);

    page.project_tag_clicked("TypeScript", start);
    page.unmount();
    assert!(!page.has_pending_url_write());
    assert!(!page.tick(start + Duration::from_secs(1)));
    assert!(page.writer().writes.is_empty());
}

#[test]
fn malformed_query_mounts_with_full_grid() {
    let projects = scenario_projects();
    let page = WorkPage::mount(&projects, "?tags=%E0%A4%A", RecordingUrlWriter::default(), DEBOUNCE);
    assert!(page.selection().is_empty());
    assert_eq!(page.filtered().len(), 3);
    assert!(page.view().all_active);
}

#[test]
fn unknown_tag_from_url_shows_empty_state() {
    let projects = scenario_projects();
    let page = WorkPage::mount(&projects, "tags=Haskell", RecordingUrlWriter::default(), DEBOUNCE);
    let view = page.view();
    assert!(view.outcome.is_empty());
    assert_eq!(
        view.outcome.empty_state().map(|state| state.title),
        Some("No projects found for selected tags")
    );
}

#[test]
fn url_round_trip_preserves_selection() {
    let selections = [
        TagSelection::new(),
        TagSelection::from_tags(["React"]),
        TagSelection::from_tags(["Next.js", "UI/UX", "Tailwind CSS"]),
        TagSelection::from_tags(["C#", "F#", "100%"]),
    ];
    for selection in selections {
        let query = encode_query("?page=2", &selection);
        assert!(decode_tags(&query).same_tags(&selection), "{query}");
    }
}
