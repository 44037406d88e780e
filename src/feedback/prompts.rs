//! Prompt construction for resume improvement suggestions

/// Build the feedback prompt, embedding the raw resume and job description
/// verbatim.
pub fn feedback_prompt(resume: &str, job_description: &str) -> String {
    format!(
        r#"You are a helpful assistant that compares a candidate's resume with a job description.
Provide specific suggestions to improve the resume to better match the job description.

Resume:
{resume}

Job Description:
{job_description}

Suggestions:
"#
    )
}
