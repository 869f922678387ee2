use crate::job::{CompanySection, JobRecord};
use crate::markup::{RenderTarget, normalize_markdown, render};

/// Returned in place of a document when the listing has no title.
pub const NO_JOB_MESSAGE: &str = "_Unable to extract job details._";

/// Stands in for a missing job description.
pub const NO_DESCRIPTION: &str = "_No description found._";

const MISSING_VALUE: &str = "—";

/// Renders a job record as a Markdown note.
///
/// The assembled document is normalized as a whole, so blank-line runs
/// introduced by the template and by the description collapse together.
pub fn render_job_document(record: Option<&JobRecord>) -> String {
    let Some(record) = record.filter(|record| !record.title.trim().is_empty()) else {
        return NO_JOB_MESSAGE.to_string();
    };

    let description = record
        .description
        .as_deref()
        .map(|nodes| render(nodes, RenderTarget::Markdown).trim().to_string())
        .filter(|description| !description.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let company = record.company_section.as_ref().map(company_to_markdown).unwrap_or_default();

    let document = format!(
        "
# {title}

**Company:** {company_name}
**Details:** {details}
**Source:** {source}


---


## Job Description

{description}


---


{company}
",
        title = record.title,
        company_name = or_missing(record.company.as_deref()),
        details = or_missing(record.meta_line.as_deref()),
        source = or_missing(Some(record.source_url.as_str())),
    );

    normalize_markdown(&document)
}

/// Renders the company box on its own.
pub fn company_to_markdown(company: &CompanySection) -> String {
    format!(
        "## {}\n\n**{}**\n{}\n\n{}",
        company.heading, company.name, company.meta, company.description
    )
    .trim()
    .to_string()
}

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|value| !value.is_empty()).unwrap_or(MISSING_VALUE)
}
