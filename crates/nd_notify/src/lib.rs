pub mod slack;
pub mod stdout;

pub use slack::SlackWebhook;
pub use stdout::StdoutNotifier;
