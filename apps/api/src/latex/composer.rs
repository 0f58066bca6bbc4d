//! Resume Composer — renders a profile tailored to a job posting as LaTeX source.
//!
//! Only interpolated values pass through [`escape`]; the skeleton itself (command names,
//! braces belonging to the template) is written verbatim. Escaping the wrong span corrupts
//! the document, and missing a span lets page content inject LaTeX commands.

use crate::latex::escape::{escape, truncate_chars};
use crate::latex::template::TemplateKind;
use crate::models::{Experience, JobPosting, Profile};

/// Experience entries beyond this count are dropped, in order.
pub const MAX_EXPERIENCES: usize = 5;
/// Characters of the job description quoted in the "Keywords match" section.
pub const KEYWORD_EXCERPT_CHARS: usize = 400;

/// Composes the full LaTeX document. No I/O and no compilation.
pub fn compose(profile: &Profile, job: &JobPosting, template: TemplateKind) -> String {
    let name = if profile.name.is_empty() {
        "Name"
    } else {
        profile.name.as_str()
    };

    let document = format!(
        r"{preamble}

\begin{{document}}
\begin{{center}}
{{\Huge {name}}}\\[2pt]
{{\small {headline}}}\\
\vspace{{4pt}}\hrule\vspace{{8pt}}
\end{{center}}

\section*{{Target Role}}
{title} at {company}

\section*{{Profile}}
{about}

\section*{{Experience}}
{experience}

\section*{{Keywords match}}
{excerpt}...

\end{{document}}",
        preamble = template.preamble(),
        name = escape(name),
        headline = escape(&profile.headline),
        title = escape(&job.title),
        company = escape(&job.company),
        about = escape(&profile.about),
        experience = render_experience_section(&profile.experiences),
        excerpt = escape(truncate_chars(&job.desc, KEYWORD_EXCERPT_CHARS)),
    );

    document.trim().to_string()
}

/// Up to the first [`MAX_EXPERIENCES`] entries joined by a blank line, or `N/A`.
fn render_experience_section(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return "N/A".to_string();
    }
    experiences
        .iter()
        .take(MAX_EXPERIENCES)
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_entry(exp: &Experience) -> String {
    format!(
        "\\entry{{{date}}}{{{title}}}{{{company}}}{{\n  {description}\n}}",
        date = escape(&exp.display_date()),
        title = escape(&exp.title),
        company = escape(&exp.company),
        description = escape(&exp.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(experiences: usize) -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            headline: "Mechanical Engineer".to_string(),
            about: "Designs things.".to_string(),
            experiences: (0..experiences)
                .map(|i| Experience {
                    date: format!("20{i:02}"),
                    title: format!("Role {i}"),
                    company: format!("Company {i}"),
                    description: format!("Did thing {i}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn make_job() -> JobPosting {
        JobPosting {
            title: "ME".to_string(),
            company: "Acme".to_string(),
            desc: "Requires ansys and matlab experience".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_modern_has_font_directive_classic_does_not() {
        let modern = compose(&make_profile(1), &make_job(), TemplateKind::Modern);
        let classic = compose(&make_profile(1), &make_job(), TemplateKind::Classic);
        assert!(modern.contains(r"\setmainfont{Helvetica Neue}"));
        assert!(!classic.contains(r"\setmainfont"));
    }

    #[test]
    fn test_seven_experiences_render_first_five_in_order() {
        let latex = compose(&make_profile(7), &make_job(), TemplateKind::Classic);
        assert_eq!(latex.matches(r"\entry{").count(), 5);
        let positions: Vec<usize> = (0..5)
            .map(|i| latex.find(&format!("Role {i}")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!latex.contains("Role 5"));
        assert!(!latex.contains("Role 6"));
    }

    #[test]
    fn test_entries_separated_by_blank_line() {
        let latex = compose(&make_profile(2), &make_job(), TemplateKind::Classic);
        assert!(latex.contains("  Did thing 0\n}\n\n\\entry{2001}{Role 1}{Company 1}{\n  Did thing 1\n}"));
    }

    #[test]
    fn test_no_experiences_renders_placeholder() {
        let latex = compose(&make_profile(0), &make_job(), TemplateKind::Classic);
        assert!(latex.contains("\\section*{Experience}\nN/A\n"));
    }

    #[test]
    fn test_user_text_is_escaped_but_skeleton_is_not() {
        let mut profile = make_profile(1);
        profile.name = "R&D {Lead}".to_string();
        profile.experiences[0].description = "Cut cost 30% \\textbf{x}".to_string();
        let latex = compose(&profile, &make_job(), TemplateKind::Classic);

        assert!(latex.contains(r"{\Huge R\&D \{Lead\}}"));
        assert!(latex.contains(r"Cut cost 30\% \textbackslash{}textbf\{x\}"));
        assert!(latex.contains(r"\section*{Target Role}"));
        assert!(latex.starts_with(r"\documentclass"));
        assert!(latex.ends_with(r"\end{document}"));
    }

    #[test]
    fn test_empty_name_falls_back_to_placeholder() {
        let latex = compose(&Profile::default(), &JobPosting::default(), TemplateKind::Compact);
        assert!(latex.contains(r"{\Huge Name}"));
        assert!(latex.contains("\\section*{Target Role}\n at \n"));
        assert!(latex.contains("\\section*{Keywords match}\n...\n"));
    }

    #[test]
    fn test_keyword_excerpt_truncated_to_400_chars_with_ellipsis() {
        let job = JobPosting {
            desc: "a".repeat(450),
            ..make_job()
        };
        let latex = compose(&make_profile(0), &job, TemplateKind::Classic);
        let expected = format!("\\section*{{Keywords match}}\n{}...\n", "a".repeat(400));
        assert!(latex.contains(&expected));
        assert!(!latex.contains(&"a".repeat(401)));
    }

    #[test]
    fn test_short_description_still_gets_ellipsis() {
        let latex = compose(&make_profile(0), &make_job(), TemplateKind::Classic);
        assert!(latex.contains("Requires ansys and matlab experience..."));
    }

    #[test]
    fn test_target_role_line() {
        let latex = compose(&make_profile(0), &make_job(), TemplateKind::Classic);
        assert!(latex.contains("\\section*{Target Role}\nME at Acme\n"));
    }

    #[test]
    fn test_entry_uses_structured_dates_when_scraped_date_missing() {
        let mut profile = make_profile(1);
        profile.experiences[0].date = String::new();
        profile.experiences[0].start_date = Some("2020".to_string());
        profile.experiences[0].end_date = Some("2022".to_string());
        let latex = compose(&profile, &make_job(), TemplateKind::Classic);
        assert!(latex.contains(r"\entry{2020 – 2022}{Role 0}"));
    }
}
