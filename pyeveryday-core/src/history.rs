//! Simulated terminal log
//!
//! Nothing here executes anything. Every action appends canned lines.

use crate::catalog::Category;

pub const SUBMIT_SUCCESS: &str = "Command executed successfully! ✅";

pub const DEMO_RUN_LINES: [&str; 4] = [
    "$ python file_organizer.py --execute",
    "🗂️  Organizing files...",
    "✅ 47 files organized successfully!",
    "📊 Created folders: Documents, Images, Videos, Others",
];

/// Append-only list of lines shown in the hero terminal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalHistory {
    lines: Vec<String>,
}

impl TerminalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A script chip in the hero terminal was clicked
    pub fn run_chip(&mut self, script: &str) {
        self.lines.push(format!("$ Running {script}..."));
        self.lines.push(success_line(script));
    }

    /// A script listed on a category card was clicked
    pub fn run_category_script(&mut self, category: &Category, script: &str) {
        self.lines.push(format!("$ {}", category.script_invocation(script)));
        self.lines.push(success_line(script));
    }

    /// The prompt was submitted. Returns `false` (and appends nothing) for blank input.
    pub fn submit(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.lines.push(format!("$ {input}"));
        self.lines.push(SUBMIT_SUCCESS.to_string());
        true
    }

    /// "Run Code" in the code showcase
    pub fn run_demo(&mut self) {
        self.lines.extend(DEMO_RUN_LINES.iter().map(|line| line.to_string()));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

fn success_line(script: &str) -> String {
    format!("✅ {script} executed successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATEGORIES;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_chip_lines() {
        let mut history = TerminalHistory::new();
        history.run_chip("File Renamer");
        assert_eq!(
            history.lines(),
            ["$ Running File Renamer...", "✅ File Renamer executed successfully!"]
        );
    }

    #[test]
    fn test_category_script_lines() {
        let mut history = TerminalHistory::new();
        history.run_category_script(&CATEGORIES[4], "Data Visualizer");
        assert_eq!(
            history.lines(),
            [
                "$ python data_tools/data_visualizer.py",
                "✅ Data Visualizer executed successfully!"
            ]
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_submit_is_ignored(#[case] input: &str) {
        let mut history = TerminalHistory::new();
        assert!(!history.submit(input));
        assert!(history.is_empty());
    }

    #[test]
    fn test_submit_keeps_raw_input() {
        let mut history = TerminalHistory::new();
        assert!(history.submit(" ls -la"));
        assert_eq!(history.lines(), ["$  ls -la", SUBMIT_SUCCESS]);
    }

    #[test]
    fn test_demo_then_clear() {
        let mut history = TerminalHistory::new();
        history.run_demo();
        assert_eq!(history.len(), 4);
        history.clear();
        assert!(history.is_empty());
    }
}
