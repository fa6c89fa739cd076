pub mod employee;
pub mod feature_table;
pub mod loader;
pub mod validate;

pub use employee::{EmployeeRecord, RawEmployeeRow, Role};
pub use feature_table::{DepartmentSummary, FeatureTable};
pub use loader::{load_feature_table, read_feature_table, LoadError};
