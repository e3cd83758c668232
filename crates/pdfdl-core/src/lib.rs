pub mod config;
pub mod logging;

pub mod batch;
pub mod fetch;
pub mod storage;
pub mod url_list;
pub mod url_model;
