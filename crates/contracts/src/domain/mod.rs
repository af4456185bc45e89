pub mod common;

pub mod a001_parameter;
pub mod a002_site;
pub mod a003_insured_object;
