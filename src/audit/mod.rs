//! Audit helpers over Profile API responses.
//!
//! These are pure functions over the model types: raid-lockout evaluation
//! against the weekly reset, and an enchant/gem check against the expected
//! seasonal baseline. Nothing here touches the network, so everything is
//! unit-testable with canned responses.

pub mod gear;
pub mod lockout;

pub use gear::{audit_equipment, Finding, FindingKind, GearAudit};
pub use lockout::{last_weekly_reset, lockout_status, no_data_message, BossKill, LockoutStatus};
