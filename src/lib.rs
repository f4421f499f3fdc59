pub mod api;
pub mod app;
pub mod dashboard;
pub mod energy_form;
pub mod gui;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod remote;
pub mod requests;
pub mod settings;
pub mod toast_log;
pub mod unit_form;
pub mod unit_list;
pub mod validation;
