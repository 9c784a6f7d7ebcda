//! Run-dialog command parsing and desktop search.

use crate::apps::{self, AppDescriptor, DesktopApp};

const RUN_ALIASES: &[(&str, DesktopApp)] = &[
    ("about", DesktopApp::AboutMe),
    ("about me", DesktopApp::AboutMe),
    ("projects", DesktopApp::Projects),
    ("my projects", DesktopApp::Projects),
    ("experiences", DesktopApp::Experiences),
    ("experience", DesktopApp::Experiences),
    ("resume", DesktopApp::Resume),
    ("cv", DesktopApp::Resume),
    ("contact", DesktopApp::Contact),
    ("mail", DesktopApp::Contact),
    ("email", DesktopApp::Contact),
    ("cmd", DesktopApp::CommandPrompt),
    ("command", DesktopApp::CommandPrompt),
    ("terminal", DesktopApp::CommandPrompt),
    ("recycle", DesktopApp::RecycleBin),
    ("recycle bin", DesktopApp::RecycleBin),
];

/// Maps free text typed into the Run dialog to a catalogue app, by alias or catalogue id.
/// Unknown text yields `None`.
pub fn parse_run_command(text: &str) -> Option<DesktopApp> {
    let normalized = text.trim().to_lowercase();
    let normalized = normalized.strip_suffix(".exe").unwrap_or(&normalized);
    RUN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, app)| *app)
        .or_else(|| {
            apps::catalogue()
                .iter()
                .find(|descriptor| descriptor.id == normalized)
                .map(|descriptor| descriptor.app)
        })
}

/// Catalogue entries whose title or keywords contain every word of `query`.
pub fn search(query: &str) -> Vec<&'static AppDescriptor> {
    let words: Vec<String> = query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();
    if words.is_empty() {
        return Vec::new();
    }

    apps::catalogue()
        .iter()
        .filter(|descriptor| {
            let title = descriptor.title.to_lowercase();
            words.iter().all(|word| {
                title.contains(word.as_str())
                    || descriptor.keywords.iter().any(|k| k.contains(word.as_str()))
            })
        })
        .collect()
}

/// What the command prompt does with one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Wipe the scrollback.
    Clear,
    /// Append these lines to the scrollback.
    Print(Vec<String>),
    /// Launch an app and report it.
    Launch(DesktopApp),
}

pub fn interpret_prompt_line(line: &str) -> PromptOutcome {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => PromptOutcome::Print(Vec::new()),
        "cls" | "clear" => PromptOutcome::Clear,
        "help" => {
            let mut lines = vec!["Available commands:".to_string()];
            lines.extend(
                apps::catalogue()
                    .iter()
                    .map(|descriptor| format!("  {:<14}{}", descriptor.id, descriptor.title)),
            );
            lines.push(format!("  {:<14}{}", "cls", "Clear the screen"));
            PromptOutcome::Print(lines)
        }
        _ => match parse_run_command(trimmed) {
            Some(app) => PromptOutcome::Launch(app),
            None => PromptOutcome::Print(vec![format!(
                "'{trimmed}' is not recognized as an internal or external command."
            )]),
        },
    }
}
