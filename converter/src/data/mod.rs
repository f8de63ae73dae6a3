// Input side: choosing the source file and loading it as a table
pub mod csv_parser;
pub mod file_selector;
