mod parser_tests;
mod sort_tests;
mod units_tests;
