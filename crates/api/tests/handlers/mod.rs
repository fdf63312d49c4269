mod health_test;
mod middleware_test;
mod slot_test;
