mod common;

mod lot_engine_tests;
