pub mod answer;
pub mod bank;
pub mod question;
