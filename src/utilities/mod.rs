pub mod check_webdriver;
pub mod generate_random_delay;
pub mod write_csv;
