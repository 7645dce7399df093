use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const NEXT_TASK_MESSAGES: &[&str] = &[
    "Read Next.js 15 App Router docs first. Check TASKS.md and complete next In Progress task using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Study Next.js 15 App Router docs. Look at TASKS.md for next In Progress item with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Read Next.js 15 App Router docs thoroughly. Open TASKS.md to find next In Progress task using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Check Next.js 15 App Router docs. View TASKS.md to implement next In Progress task with TypeScript and Tailwind. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Review Next.js 15 App Router docs. Read TASKS.md to handle next In Progress item with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Study Next.js 15 App Router docs. Check TASKS.md and tackle next In Progress task using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Read Next.js 15 App Router docs. Open TASKS.md to continue next In Progress task with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Check Next.js 15 App Router docs first. Review TASKS.md to develop next In Progress item using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Review Next.js 15 App Router docs. Look at TASKS.md to code next In Progress task with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Study Next.js 15 App Router docs first. See TASKS.md for next In Progress feature with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Read Next.js 15 App Router docs thoroughly. Check TASKS.md to complete next In Progress task using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Check Next.js 15 App Router docs. View TASKS.md and implement next In Progress task with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Review Next.js 15 App Router docs. Open TASKS.md to finish next In Progress item using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Study Next.js 15 App Router docs first. Look at TASKS.md to code next In Progress task with TypeScript and Tailwind. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Read Next.js 15 App Router docs. Check TASKS.md to develop next In Progress item with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Check Next.js 15 App Router docs thoroughly. View TASKS.md to complete next In Progress task using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Review Next.js 15 App Router docs first. Read TASKS.md for next In Progress feature with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Study Next.js 15 App Router docs. Review TASKS.md to implement next In Progress item using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Read Next.js 15 App Router docs first. Check TASKS.md to work on next In Progress task with TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Check Next.js 15 App Router docs thoroughly. Open TASKS.md to finish next In Progress feature using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Review Next.js 15 App Router docs. View TASKS.md and code next In Progress task with TypeScript and Tailwind. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
    "Study Next.js 15 App Router docs first. Look at TASKS.md to develop next In Progress item using TypeScript. if really needed create files to fix errors. DO NOT install any packages. DO NOT run any commands, just edit code.",
];

const FIX_ERRORS_MESSAGES: &[&str] = &[
    "Ultrathink and fix errors on my existing files codes by following the next js 15 app router version and typescript docs and do not duplcate files or codes",
];

/// Hard-coded message list and typing pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Work through the next In Progress item of TASKS.md
    #[default]
    NextTask,
    /// Ask for a pass over existing errors, typed slowly
    FixErrors,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown profile '{0}', expected 'next' or 'fix'")]
    Unknown(String),
}

impl Profile {
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Profile::NextTask => NEXT_TASK_MESSAGES,
            Profile::FixErrors => FIX_ERRORS_MESSAGES,
        }
    }

    /// Delay between typed characters
    pub fn typing_interval(&self) -> Duration {
        match self {
            Profile::NextTask => Duration::ZERO,
            Profile::FixErrors => Duration::from_millis(100),
        }
    }

    /// Picks the profile named by `value`, falling back to the default when unset.
    pub fn resolve(value: Option<&str>) -> Result<Self, ProfileError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(name) => name.parse(),
        }
    }
}

impl FromStr for Profile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" | "next-task" => Ok(Profile::NextTask),
            "fix" | "fix-errors" => Ok(Profile::FixErrors),
            _ => Err(ProfileError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_next_task() {
        assert_eq!(Profile::resolve(None), Ok(Profile::NextTask));
        assert_eq!(Profile::resolve(Some("  ")), Ok(Profile::NextTask));
    }

    #[test]
    fn test_resolve_named_profiles() {
        assert_eq!(Profile::resolve(Some("fix")), Ok(Profile::FixErrors));
        assert_eq!(Profile::resolve(Some("Next-Task")), Ok(Profile::NextTask));
    }

    #[test]
    fn test_resolve_unknown_profile() {
        assert_eq!(
            Profile::resolve(Some("turbo")),
            Err(ProfileError::Unknown("turbo".to_string()))
        );
    }

    #[test]
    fn test_profiles_have_messages() {
        assert_eq!(Profile::NextTask.messages().len(), 22);
        assert_eq!(Profile::FixErrors.messages().len(), 1);
        assert!(Profile::NextTask.messages().iter().all(|m| m.is_ascii()));
    }

    #[test]
    fn test_fix_errors_types_slowly() {
        assert!(Profile::FixErrors.typing_interval() > Profile::NextTask.typing_interval());
    }
}
