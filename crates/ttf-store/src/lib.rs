//! File-backed timetable persistence.

pub mod store;

pub use store::{
    delete_timetable, list_timetables, load_latest, load_timetable, save_timetable, store_stats,
    StoreStats, TimetableSummary,
};
