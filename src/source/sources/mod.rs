/// CSV file-backed table source.
pub mod csv_file;
