//! Input handling: reading delimited text files into a [`crate::Table`].

mod reader;

pub use reader::{parse_delimiter, read_table, read_table_from_reader, ReaderOptions};
