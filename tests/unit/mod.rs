mod common;

mod selection_tests;
mod volume_tests;
