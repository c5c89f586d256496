mod args_tests;
mod hint_tests;
