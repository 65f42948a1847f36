mod app;
mod commit;
mod openai;

pub use app::Settings;
pub use commit::CommitTemplateConfig;
pub use openai::OpenAIConfig;
