#[path = "query/indexed.rs"]
mod indexed;
#[path = "query/naive.rs"]
mod naive;
#[path = "query/sparse.rs"]
mod sparse;
#[path = "query/sweep.rs"]
mod sweep;
