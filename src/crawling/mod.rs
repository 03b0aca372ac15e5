pub mod crawl_category_pages;
pub mod crawl_detail_page;
pub mod goto_page;
