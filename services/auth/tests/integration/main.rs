mod router_test;
mod signup_test;
