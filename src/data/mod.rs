//! Database repository layer.
//!
//! Repositories handle database operations for each domain in the
//! application. They use SeaORM entity models internally and keep all queries,
//! inserts, and upserts behind one seam so the service layer never builds SQL.

pub mod log_setting;

pub use log_setting::LogSettingRepository;

#[cfg(test)]
mod test;
