//! Listing filters: neighborhood filter URLs and the trending location tabs.

use std::collections::BTreeSet;

use tracing::debug;

use crate::content::Project;

/// Path of the full project listing.
pub const LISTING_PATH: &str = "/all-projects";

/// Listing URL narrowed by locality and/or bedroom count.
///
/// Parameters are appended in the order `locality`, `bedrooms`, and only when
/// present and non-empty; with neither there is no query string at all.
///
/// ```rust
/// use homepage_leptos::filters::build_filter_url;
///
/// assert_eq!(build_filter_url(None, None), "/all-projects");
/// assert_eq!(
///     build_filter_url(Some("Bandra"), Some("2")),
///     "/all-projects?locality=Bandra&bedrooms=2"
/// );
/// ```
pub fn build_filter_url(locality: Option<&str>, bedrooms: Option<&str>) -> String {
    let params = [("locality", locality), ("bedrooms", bedrooms)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>();

    if params.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{}?{}", LISTING_PATH, params.join("&"))
    }
}

/// Distinct non-empty project locations, sorted.
pub fn location_tabs(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|project| project.location.as_str())
        .filter(|location| !location.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Projects whose location equals `tab` exactly (case-sensitive, untrimmed).
pub fn filter_by_location<'a>(projects: &'a [Project], tab: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| project.location == tab)
        .collect()
}

/// Location tab state for the trending projects section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrendingTabs {
    labels: Vec<String>,
    active: Option<String>,
}

impl TrendingTabs {
    /// Tabs for `projects`, with the first label active.
    pub fn new(projects: &[Project]) -> Self {
        let mut tabs = Self::default();
        tabs.sync(projects);
        tabs
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-derive the labels from the current collection.
    ///
    /// When the active label is no longer present it resets to the first new
    /// label. Returns `true` only when the active tab changed, so repeated
    /// calls with unchanged data are no-ops.
    pub fn sync(&mut self, projects: &[Project]) -> bool {
        self.labels = location_tabs(projects);

        if self
            .active
            .as_ref()
            .is_some_and(|active| self.labels.contains(active))
        {
            return false;
        }

        let next = self.labels.first().cloned();
        if next == self.active {
            return false;
        }
        debug!(from = ?self.active, to = ?next, "trending tab reset");
        self.active = next;
        true
    }

    /// Switch to `label` on a user click. Unknown labels are ignored.
    pub fn activate(&mut self, label: &str) -> bool {
        if self.active.as_deref() == Some(label) || !self.labels.iter().any(|l| l == label) {
            return false;
        }
        self.active = Some(label.to_string());
        true
    }

    /// Projects shown under the active tab.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        match &self.active {
            Some(tab) => filter_by_location(projects, tab),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: u64, location: &str) -> Project {
        Project {
            id,
            name: format!("Project {id}"),
            location: location.into(),
            ..Default::default()
        }
    }

    fn projects(locations: &[&str]) -> Vec<Project> {
        locations
            .iter()
            .enumerate()
            .map(|(idx, loc)| project(idx as u64 + 1, loc))
            .collect()
    }

    #[test]
    fn filter_url_variants() {
        assert_eq!(build_filter_url(None, None), "/all-projects");
        assert_eq!(
            build_filter_url(Some("Bandra"), None),
            "/all-projects?locality=Bandra"
        );
        assert_eq!(build_filter_url(None, Some("2")), "/all-projects?bedrooms=2");
        assert_eq!(
            build_filter_url(Some("Bandra"), Some("2")),
            "/all-projects?locality=Bandra&bedrooms=2"
        );
    }

    #[test]
    fn filter_url_skips_empty_and_encodes_values() {
        assert_eq!(build_filter_url(Some(""), Some("")), "/all-projects");
        assert_eq!(
            build_filter_url(Some("Navi Mumbai"), None),
            "/all-projects?locality=Navi%20Mumbai"
        );
        assert_eq!(
            build_filter_url(Some("A&B"), Some("1")),
            "/all-projects?locality=A%26B&bedrooms=1"
        );
    }

    #[test]
    fn tabs_are_sorted_deduplicated_and_non_empty() {
        let list = projects(&["Andheri", "", "Bandra", "Andheri"]);
        assert_eq!(location_tabs(&list), vec!["Andheri", "Bandra"]);

        let list = projects(&["Worli", "andheri", "Andheri", "Bandra "]);
        assert_eq!(
            location_tabs(&list),
            vec!["Andheri", "Bandra ", "Worli", "andheri"]
        );
    }

    #[test]
    fn filtering_is_exact_and_non_destructive() {
        let list = projects(&["Andheri", "andheri", "Andheri ", "Andheri"]);
        let before = list.clone();

        let ids = filter_by_location(&list, "Andheri")
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec![1, 4]);
        assert_eq!(list, before);
    }

    #[test]
    fn first_tab_active_by_default() {
        let tabs = TrendingTabs::new(&projects(&["Thane", "Bandra", "Powai"]));
        assert_eq!(tabs.active(), Some("Bandra"));
        assert_eq!(tabs.labels(), ["Bandra", "Powai", "Thane"]);
    }

    #[test]
    fn switching_tabs_changes_only_the_view() {
        let list = projects(&["Thane", "Bandra", "Thane"]);
        let mut tabs = TrendingTabs::new(&list);

        assert!(tabs.activate("Thane"));
        let ids = tabs.visible(&list).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);

        assert!(!tabs.activate("Thane"));
        assert!(!tabs.activate("Nowhere"));
        assert_eq!(tabs.active(), Some("Thane"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn stale_active_tab_resets_exactly_once() {
        let mut tabs = TrendingTabs::new(&projects(&["Bandra", "Thane"]));
        assert!(tabs.activate("Thane"));

        let reloaded = projects(&["Worli", "Chembur"]);
        assert!(tabs.sync(&reloaded));
        assert_eq!(tabs.active(), Some("Chembur"));

        for _ in 0..3 {
            assert!(!tabs.sync(&reloaded));
            assert_eq!(tabs.active(), Some("Chembur"));
        }
    }

    #[test]
    fn surviving_active_tab_is_kept_on_reload() {
        let mut tabs = TrendingTabs::new(&projects(&["Bandra", "Thane"]));
        tabs.activate("Thane");

        assert!(!tabs.sync(&projects(&["Andheri", "Thane"])));
        assert_eq!(tabs.active(), Some("Thane"));
    }

    #[test]
    fn empty_collection_has_no_active_tab() {
        let mut tabs = TrendingTabs::new(&projects(&["", ""]));
        assert_eq!(tabs.active(), None);
        assert!(tabs.visible(&[]).is_empty());
        assert!(!tabs.sync(&[]));

        assert!(tabs.sync(&projects(&["Powai"])));
        assert_eq!(tabs.active(), Some("Powai"));
        assert!(tabs.sync(&[]));
        assert_eq!(tabs.active(), None);
    }
}
