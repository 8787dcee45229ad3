pub mod mailer;
pub mod serve;
