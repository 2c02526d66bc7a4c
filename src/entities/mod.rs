// Reference data
pub mod press_machine;
pub mod supplier;
pub mod warehouse;

// The lot store
pub mod material_lot;

// Stage ledgers (append-only, one table per transformation stage)
pub mod core_build_log;
pub mod hot_press_log;
pub mod press_dry_log;
pub mod repair_log;
pub mod scarf_join_log;

// Composite assembly records and terminal output
pub mod finished_good;
pub mod plywood_setting;
