mod csv_import;

pub use csv_import::{BudgetRecords, CsvImporter};
