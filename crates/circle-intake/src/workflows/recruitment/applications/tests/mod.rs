mod base_schema;
mod common;
mod refinement;
mod tables;
