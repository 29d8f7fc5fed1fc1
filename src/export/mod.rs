mod csv_writer;

pub use csv_writer::save_to_csv;
