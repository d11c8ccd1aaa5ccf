//! (day, period) -> busy resources index over committed slots.

use std::collections::{HashMap, HashSet};

use ttf_core::Slot;

/// Which lecturers and rooms are busy at one (day, period).
#[derive(Debug, Default, Clone)]
pub struct BusyResources {
    pub lecturers: HashSet<String>,
    pub rooms: HashSet<String>,
}

/// Fast collision lookup over an already-committed slot set.
///
/// Built strictly from committed slots; the division currently being
/// generated never contributes to its own index.
#[derive(Debug, Default, Clone)]
pub struct OccupancyIndex {
    map: HashMap<(String, u32), BusyResources>,
}

impl OccupancyIndex {
    pub fn from_slots(slots: &[Slot]) -> Self {
        let mut map: HashMap<(String, u32), BusyResources> = HashMap::new();
        for slot in slots {
            let entry = map
                .entry((slot.day.clone(), slot.period))
                .or_default();
            entry.lecturers.insert(slot.lecturer.clone());
            entry.rooms.insert(slot.room.clone());
        }
        Self { map }
    }

    /// True if the lecturer or the room is already taken at (day, period).
    pub fn is_busy(&self, day: &str, period: u32, lecturer: &str, room: &str) -> bool {
        self.map
            .get(&(day.to_string(), period))
            .is_some_and(|busy| busy.lecturers.contains(lecturer) || busy.rooms.contains(room))
    }

    pub fn get(&self, day: &str, period: u32) -> Option<&BusyResources> {
        self.map.get(&(day.to_string(), period))
    }

    /// Iterate occupied (day, period) pairs with their busy resources.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, u32), &BusyResources)> {
        self.map.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
#[path = "occupancy_tests.rs"]
mod tests;
