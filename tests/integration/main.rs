mod common;
mod form_flow_test;
mod health_test;
