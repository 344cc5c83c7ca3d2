mod book_test;
mod router_test;
