//! Zone-class allow-list.

use hashbrown::HashSet;

/// FEMA zone classes making up the 100-year (1% annual chance) floodplain
pub const HUNDRED_YEAR_ZONES: [&str; 4] = ["AE", "A", "AO", "VE"];

/// Set of zone classes whose polygons take part in the distance search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFilter {
    allowed: HashSet<String>,
}

impl ZoneFilter {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// The 100-year floodplain designation family
    pub fn hundred_year() -> Self {
        Self::new(HUNDRED_YEAR_ZONES)
    }

    /// Whether a zone with this class passes. A missing class never does.
    pub fn allows(&self, zone_class: Option<&str>) -> bool {
        zone_class.is_some_and(|class| self.allowed.contains(class))
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Allowed classes, sorted
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.allowed.iter().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }
}

impl Default for ZoneFilter {
    fn default() -> Self {
        Self::hundred_year()
    }
}
