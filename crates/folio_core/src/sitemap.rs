//! Sitemap route list.
//!
//! # Responsibility
//! - Enumerate the static pages and one detail route per project.
//! - Render the list as sitemap XML.
//!
//! # Invariants
//! - Static routes come first, in navigation order.
//! - Project routes follow catalog order.

use crate::model::project::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 6] = [
    ("", ChangeFrequency::Monthly, 1.0),
    ("/work", ChangeFrequency::Weekly, 0.8),
    ("/creations", ChangeFrequency::Weekly, 0.8),
    ("/music", ChangeFrequency::Weekly, 0.8),
    ("/about", ChangeFrequency::Monthly, 0.7),
    ("/contact", ChangeFrequency::Monthly, 0.6),
];
const PROJECT_PRIORITY: f32 = 0.7;

/// Builds sitemap entries under `base_url`.
pub fn build_sitemap(base_url: &str, projects: &[Project]) -> Vec<SitemapEntry> {
    let base = base_url.trim().trim_end_matches('/');
    let mut entries = STATIC_ROUTES
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            url: format!("{base}{path}"),
            change_frequency: *change_frequency,
            priority: *priority,
        })
        .collect::<Vec<_>>();

    entries.extend(projects.iter().map(|project| SitemapEntry {
        url: format!("{base}{}", project.route()),
        change_frequency: ChangeFrequency::Monthly,
        priority: PROJECT_PRIORITY,
    }));
    entries
}

/// Renders entries as a `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url><loc>{}</loc><changefreq>{}</changefreq><priority>{:.1}</priority></url>\n",
            escape_xml(&entry.url),
            entry.change_frequency.as_str(),
            entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::{build_sitemap, escape_xml, render_xml, ChangeFrequency};
    use crate::model::project::Project;

    #[test]
    fn static_routes_precede_project_routes() {
        let projects = vec![Project::new("shader-playground", "Shaders", "glsl", &[])];
        let entries = build_sitemap("https://kenzuu.dev/", &projects);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].url, "https://kenzuu.dev");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[5].url, "https://kenzuu.dev/contact");
        assert_eq!(entries[6].url, "https://kenzuu.dev/work/shader-playground");
        assert_eq!(entries[6].change_frequency, ChangeFrequency::Monthly);
    }

    #[test]
    fn xml_escapes_urls() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
        let xml = render_xml(&build_sitemap("https://x.dev", &[]));
        assert!(xml.contains("<loc>https://x.dev/music</loc><changefreq>weekly</changefreq><priority>0.8</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
