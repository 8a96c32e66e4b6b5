use serde::Deserialize;

/// One raw program slot as delivered by the station feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_timestamp: String,
    pub end_timestamp: String,
}

/// The two-week feed payload, keyed by day name: `monday..sunday` for the
/// current week and `nextmonday..nextsunday` for the following one.
///
/// Every key is optional (absent days deserialize as empty arrays), and
/// extra keys such as the API version tag are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekInfo {
    #[serde(default)]
    pub monday: Vec<ShowRecord>,
    #[serde(default)]
    pub tuesday: Vec<ShowRecord>,
    #[serde(default)]
    pub wednesday: Vec<ShowRecord>,
    #[serde(default)]
    pub thursday: Vec<ShowRecord>,
    #[serde(default)]
    pub friday: Vec<ShowRecord>,
    #[serde(default)]
    pub saturday: Vec<ShowRecord>,
    #[serde(default)]
    pub sunday: Vec<ShowRecord>,
    #[serde(default)]
    pub nextmonday: Vec<ShowRecord>,
    #[serde(default)]
    pub nexttuesday: Vec<ShowRecord>,
    #[serde(default)]
    pub nextwednesday: Vec<ShowRecord>,
    #[serde(default)]
    pub nextthursday: Vec<ShowRecord>,
    #[serde(default)]
    pub nextfriday: Vec<ShowRecord>,
    #[serde(default)]
    pub nextsaturday: Vec<ShowRecord>,
    #[serde(default)]
    pub nextsunday: Vec<ShowRecord>,
}

impl WeekInfo {
    /// Records for canonical weekday index 0-6 (Monday through Sunday) in
    /// week `offset` (0 = current week, 1 = next week).
    pub fn day(&self, offset: usize, weekday: usize) -> &[ShowRecord] {
        match (offset, weekday) {
            (0, 0) => &self.monday,
            (0, 1) => &self.tuesday,
            (0, 2) => &self.wednesday,
            (0, 3) => &self.thursday,
            (0, 4) => &self.friday,
            (0, 5) => &self.saturday,
            (0, 6) => &self.sunday,
            (1, 0) => &self.nextmonday,
            (1, 1) => &self.nexttuesday,
            (1, 2) => &self.nextwednesday,
            (1, 3) => &self.nextthursday,
            (1, 4) => &self.nextfriday,
            (1, 5) => &self.nextsaturday,
            (1, 6) => &self.nextsunday,
            _ => &[],
        }
    }
}
