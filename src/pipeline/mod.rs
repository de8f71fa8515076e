// Batch comparison pipeline — line-pair grids between two documents.

pub mod batch;
