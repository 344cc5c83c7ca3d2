pub mod password;
pub mod signup;
pub mod token;
