pub mod dataset_tests;
pub mod source_tests;
pub mod e2e_tests;
