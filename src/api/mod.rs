//! API service modules for Profile API endpoints.
//!
//! Each service provides methods for one subset of the character profile:
//! the summary, raid encounters, and equipped items.

mod encounters;
mod equipment;
mod profile;

pub use encounters::EncountersService;
pub use equipment::EquipmentService;
pub use profile::ProfileService;
