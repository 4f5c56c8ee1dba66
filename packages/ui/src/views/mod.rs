mod home;
pub use home::Home;

mod categories;
pub use categories::Categories;

mod expenses;
pub use expenses::Expenses;

mod statistics;
pub use statistics::Statistics;

mod audit_logs;
pub use audit_logs::AuditLogs;

mod unauthorized;
pub use unauthorized::Unauthorized;

mod not_found;
pub use not_found::NotFound;
