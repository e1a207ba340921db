use std::collections::HashMap;

/// Resolves vessel and terminal display names to the operator's internal
/// abbreviations. Static reference data, injected so tests can substitute it.
pub trait AbbrevLookup: Send + Sync {
    fn vessel_abbrev(&self, name: &str) -> Option<&str>;
    fn terminal_abbrev(&self, name: &str) -> Option<&str>;
}

/// Official crossing times in minutes, keyed by route and terminal pair.
/// Fallback when the feed supplies no usable arrival time.
pub trait CrossingTimes: Send + Sync {
    fn crossing_minutes(
        &self,
        route_abbrev: &str,
        departing_terminal_abbrev: &str,
        arriving_terminal_abbrev: &str,
    ) -> Option<u32>;
}

#[derive(Debug, Default, Clone)]
pub struct StaticAbbrevLookup {
    vessels: HashMap<String, String>,
    terminals: HashMap<String, String>,
}

impl StaticAbbrevLookup {
    pub fn new(
        vessels: impl IntoIterator<Item = (String, String)>,
        terminals: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            vessels: vessels.into_iter().collect(),
            terminals: terminals.into_iter().collect(),
        }
    }
}

impl AbbrevLookup for StaticAbbrevLookup {
    fn vessel_abbrev(&self, name: &str) -> Option<&str> {
        self.vessels.get(name).map(String::as_str)
    }

    fn terminal_abbrev(&self, name: &str) -> Option<&str> {
        self.terminals.get(name).map(String::as_str)
    }
}

#[derive(Debug, Default, Clone)]
pub struct StaticCrossingTimes {
    minutes: HashMap<(String, String, String), u32>,
}

impl StaticCrossingTimes {
    pub fn new(minutes: impl IntoIterator<Item = ((String, String, String), u32)>) -> Self {
        Self {
            minutes: minutes.into_iter().collect(),
        }
    }
}

impl CrossingTimes for StaticCrossingTimes {
    fn crossing_minutes(
        &self,
        route_abbrev: &str,
        departing_terminal_abbrev: &str,
        arriving_terminal_abbrev: &str,
    ) -> Option<u32> {
        self.minutes
            .get(&(
                route_abbrev.to_owned(),
                departing_terminal_abbrev.to_owned(),
                arriving_terminal_abbrev.to_owned(),
            ))
            .copied()
    }
}
