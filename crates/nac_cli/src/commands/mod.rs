pub mod instances;
pub mod tasks;
pub mod users;
pub mod workflows;
