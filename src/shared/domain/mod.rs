pub mod bounded_string;
