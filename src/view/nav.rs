//! The navigation links, settings link and progress bar of the sidebar.

use std::time::Duration;

/// The label of the settings link at the bottom of the sidebar.
pub const SETTINGS_LABEL: &str = "Ustawienia";

/// Base delay before the first link appears.
const ENTRANCE_BASE_DELAY: Duration = Duration::from_millis(300);
/// Additional delay per link position.
const ENTRANCE_STAGGER: Duration = Duration::from_millis(100);

/// An ordered list of navigation link labels with a staggered entrance:
/// each link appears later than the previous one by a fixed step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NavigationLinks {
    links: Vec<String>,
}

impl NavigationLinks {
    pub fn new<S: Into<String>>(links: impl IntoIterator<Item = S>) -> Self {
        Self {
            links: links.into_iter().map(|s| s.into()).collect(),
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// When the link at `index` becomes visible, measured from mount.
    pub fn entrance_delay(index: usize) -> Duration {
        ENTRANCE_BASE_DELAY + ENTRANCE_STAGGER * index as u32
    }

    /// The entrance schedule: each link paired with its appearance delay, in
    /// link order.
    pub fn schedule(&self) -> Vec<(Duration, &str)> {
        self.links
            .iter()
            .enumerate()
            .map(|(ix, link)| (Self::entrance_delay(ix), link.as_str()))
            .collect()
    }

    /// Renders the fully-entered list, one bordered line per link.
    pub fn render(&self) -> String {
        self.links
            .iter()
            .map(|link| format!("▏ {link}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders the settings link.
pub fn settings_link() -> String {
    format!("⚙ {SETTINGS_LABEL}")
}

/// A horizontal progress bar. Input is clamped to `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    progress: f64,
}

impl ProgressBar {
    pub fn new(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// The clamped progress as a percentage, `0..=100`.
    pub fn percentage(&self) -> f64 {
        self.progress * 100.0
    }

    /// Renders the bar at the given character width, e.g. `[####------] 40%`.
    pub fn render(&self, width: usize) -> String {
        let filled = (self.progress * width as f64).round() as usize;
        format!(
            "[{}{}] {:.0}%",
            "#".repeat(filled),
            "-".repeat(width - filled),
            self.percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_delays_are_staggered() {
        assert_eq!(NavigationLinks::entrance_delay(0), Duration::from_millis(300));
        assert_eq!(NavigationLinks::entrance_delay(1), Duration::from_millis(400));
        assert_eq!(NavigationLinks::entrance_delay(4), Duration::from_millis(700));
    }

    #[test]
    fn test_schedule_is_in_link_order() {
        let nav = NavigationLinks::new(["Pulpit", "Transakcje", "Marzenia"]);
        let schedule = nav.schedule();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0], (Duration::from_millis(300), "Pulpit"));
        assert_eq!(schedule[2], (Duration::from_millis(500), "Marzenia"));
        assert!(schedule.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_render_lists_every_link() {
        let nav = NavigationLinks::new(["Pulpit", "Transakcje"]);
        let rendered = nav.render();
        assert!(rendered.contains("Pulpit"));
        assert!(rendered.contains("Transakcje"));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_settings_link_label() {
        assert!(settings_link().contains("Ustawienia"));
    }

    #[test]
    fn test_progress_clamps_both_ends() {
        assert_eq!(ProgressBar::new(-0.5).percentage(), 0.0);
        assert_eq!(ProgressBar::new(1.5).percentage(), 100.0);
        assert_eq!(ProgressBar::new(0.4).percentage(), 40.0);
    }

    #[test]
    fn test_progress_render() {
        assert_eq!(ProgressBar::new(0.5).render(10), "[#####-----] 50%");
        assert_eq!(ProgressBar::new(0.0).render(4), "[----] 0%");
        assert_eq!(ProgressBar::new(1.0).render(4), "[####] 100%");
    }
}
