pub mod html;
pub mod json;
pub mod markdown;

pub use html::{NO_WORD_MESSAGE, render_word_document};
pub use json::{JsonConfig, JsonRecord, convert_to_json};
pub use markdown::{NO_DESCRIPTION, NO_JOB_MESSAGE, company_to_markdown, render_job_document};
