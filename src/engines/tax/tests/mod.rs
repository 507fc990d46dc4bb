mod common;
mod self_employment;
mod summary;
