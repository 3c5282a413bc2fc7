pub mod chart_service;
pub mod form_service;
