/// Parsers for the textual date forms used on the command line.
pub mod data_parsers;
