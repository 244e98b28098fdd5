pub(crate) mod batch;
pub(crate) mod detail;
pub(crate) mod list;
