//! Static page composition: the sidebar and the page frame around cards.

use crate::view::nav::settings_link;
use crate::view::NavigationLinks;

const SIDEBAR_WIDTH: usize = 24;

/// The fixed sidebar: application title, navigation links, settings link.
#[derive(Debug, Clone)]
pub struct Sidebar {
    title: String,
    links: NavigationLinks,
}

impl Sidebar {
    pub fn new(title: impl Into<String>, links: NavigationLinks) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![self.title.clone(), String::new()];
        lines.extend(self.links.render().lines().map(|l| l.to_string()));
        lines.push(String::new());
        lines.push(settings_link());
        lines.join("\n")
    }
}

/// A page frame: the sidebar on the left, content on the right.
#[derive(Debug, Clone)]
pub struct Page {
    sidebar: Sidebar,
    content: String,
}

impl Page {
    pub fn new(sidebar: Sidebar, content: impl Into<String>) -> Self {
        Self {
            sidebar,
            content: content.into(),
        }
    }

    /// Lays the sidebar next to the content, padding the sidebar column to a
    /// fixed width.
    pub fn render(&self) -> String {
        let sidebar = self.sidebar.render();
        let left: Vec<&str> = sidebar.lines().collect();
        let right: Vec<&str> = self.content.lines().collect();
        let rows = left.len().max(right.len());

        let mut out = Vec::with_capacity(rows);
        for ix in 0..rows {
            let l = left.get(ix).copied().unwrap_or("");
            let r = right.get(ix).copied().unwrap_or("");
            let pad = SIDEBAR_WIDTH.saturating_sub(l.chars().count());
            out.push(format!("{l}{}  {r}", " ".repeat(pad)).trim_end().to_string());
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Sidebar {
        Sidebar::new(
            "Złotówka",
            NavigationLinks::new(["Pulpit", "Transakcje", "Marzenia"]),
        )
    }

    #[test]
    fn test_sidebar_renders_title_links_and_settings() {
        let rendered = sidebar().render();
        assert!(rendered.starts_with("Złotówka"));
        assert!(rendered.contains("Pulpit"));
        assert!(rendered.contains("Marzenia"));
        assert!(rendered.ends_with("⚙ Ustawienia"));
    }

    #[test]
    fn test_page_places_content_beside_sidebar() {
        let page = Page::new(sidebar(), "┌ Następny przychód\n│ 100 PLN");
        let rendered = page.render();
        let first = rendered.lines().next().unwrap();
        assert!(first.contains("Złotówka"));
        assert!(first.contains("Następny przychód"));
    }

    #[test]
    fn test_page_handles_content_taller_than_sidebar() {
        let tall = vec!["line"; 20].join("\n");
        let page = Page::new(sidebar(), tall);
        assert_eq!(page.render().lines().count(), 20);
    }
}
