#![deny(warnings)]
pub mod detector;
pub mod flow;
pub mod logging;
pub mod report;
pub mod storage;
