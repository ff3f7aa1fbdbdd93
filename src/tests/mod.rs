pub mod fake_dom;

mod navigator_tests;
