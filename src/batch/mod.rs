mod records;

pub use records::{
    load_rows, read_rows, score_rows, write_csv, write_json, BatchResult, BatchRow, BatchSummary,
};
