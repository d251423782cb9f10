pub mod constants;
pub mod equality;
pub mod options;
pub mod scan_input;
pub mod validation;
pub mod zeeman_input;
