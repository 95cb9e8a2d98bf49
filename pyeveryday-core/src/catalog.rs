//! Static script catalog shown on the landing page

/// A thematic grouping of scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub emoji: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub scripts: &'static [&'static str],
    /// Tailwind-style gradient stops, e.g. `from-cyan-400 to-blue-600`
    pub color: &'static str,
    pub hover_color: &'static str,
    /// CSS `background-image` value layered over the gradient
    pub bg_pattern: &'static str,
    pub icon: &'static str,
}

/// Number of scripts a collapsed category card shows
pub const COLLAPSED_SCRIPTS: usize = 3;

pub const CATEGORIES: &[Category] = &[
    Category {
        emoji: "🤖",
        name: "Automation",
        description: "Smart scripts that work while you sleep",
        scripts: &[
            "Auto Email Sender",
            "File Organizer",
            "Backup Scheduler",
            "File Renamer",
            "Folder Monitor",
        ],
        color: "from-cyan-400 to-blue-600",
        hover_color: "hover:from-cyan-500 hover:to-blue-700",
        bg_pattern: "linear-gradient(45deg, rgba(6,182,212,0.1) 25%, transparent 25%), linear-gradient(-45deg, rgba(6,182,212,0.1) 25%, transparent 25%)",
        icon: "⚡",
    },
    Category {
        emoji: "🧠",
        name: "Productivity",
        description: "Focus amplifiers for peak performance",
        scripts: &[
            "Pomodoro Timer",
            "Quote Fetcher",
            "Reminder System",
            "Time Tracker",
            "Todo Manager",
        ],
        color: "from-purple-400 to-pink-600",
        hover_color: "hover:from-purple-500 hover:to-pink-700",
        bg_pattern: "radial-gradient(circle at 20% 50%, rgba(168,85,247,0.1) 0%, transparent 50%)",
        icon: "🚀",
    },
    Category {
        emoji: "🌐",
        name: "Web Scraping",
        description: "Extract gold from the digital wilderness",
        scripts: &[
            "News Fetcher",
            "Weather Checker",
            "Web Scraper",
            "YouTube Downloader",
        ],
        color: "from-green-400 to-teal-600",
        hover_color: "hover:from-green-500 hover:to-teal-700",
        bg_pattern: "repeating-linear-gradient(90deg, transparent, transparent 2px, rgba(34,197,94,0.1) 2px, rgba(34,197,94,0.1) 4px)",
        icon: "🌊",
    },
    Category {
        emoji: "⚙️",
        name: "Utilities",
        description: "Your digital Swiss Army knife",
        scripts: &[
            "Age Calculator",
            "Currency Converter",
            "Password Generator",
            "Unit Converter",
        ],
        color: "from-orange-400 to-red-600",
        hover_color: "hover:from-orange-500 hover:to-red-700",
        bg_pattern: "conic-gradient(from 0deg, rgba(251,146,60,0.1), rgba(239,68,68,0.1), rgba(251,146,60,0.1))",
        icon: "🔧",
    },
    Category {
        emoji: "📊",
        name: "Data Tools",
        description: "Transform chaos into insights",
        scripts: &["Data Converter", "Data Processor", "Data Visualizer"],
        color: "from-indigo-400 to-purple-600",
        hover_color: "hover:from-indigo-500 hover:to-purple-700",
        bg_pattern: "linear-gradient(135deg, rgba(99,102,241,0.1) 0%, rgba(168,85,247,0.1) 100%)",
        icon: "📈",
    },
    Category {
        emoji: "🔐",
        name: "Security",
        description: "Your digital fortress guardian",
        scripts: &["Password Checker", "File Encryptor"],
        color: "from-red-400 to-pink-600",
        hover_color: "hover:from-red-500 hover:to-pink-700",
        bg_pattern: "radial-gradient(ellipse at center, rgba(239,68,68,0.1) 0%, transparent 70%)",
        icon: "🛡️",
    },
    Category {
        emoji: "🎵",
        name: "Media",
        description: "Master of multimedia manipulation",
        scripts: &["Audio Processor", "Image Processor"],
        color: "from-yellow-400 to-orange-600",
        hover_color: "hover:from-yellow-500 hover:to-orange-700",
        bg_pattern: "linear-gradient(60deg, rgba(251,191,36,0.1) 25%, transparent 25%), linear-gradient(120deg, rgba(251,191,36,0.1) 25%, transparent 25%)",
        icon: "🎨",
    },
];

/// Commands replayed by the hero terminal's typing animation, in order
pub const TERMINAL_COMMANDS: &[&str] = &[
    "python automation/auto_email_sender.py --schedule daily",
    "python productivity/pomodoro_timer.py --work 25 --break 5",
    "python web_scraping/news_fetcher.py --source tech --limit 10",
    "python utilities/password_generator.py --length 16 --secure",
    "python data_tools/data_visualizer.py --input data.csv --chart bar",
    "python security/password_checker.py --file passwords.txt",
    "python media/image_processor.py --resize 1920x1080 --format jpg",
];

impl Category {
    /// Directory name the category's scripts live under, e.g. `web_scraping`
    pub fn dir_name(&self) -> String {
        slugify(self.name)
    }

    /// Invocation shown when one of this category's scripts is "run"
    pub fn script_invocation(&self, script: &str) -> String {
        format!("python {}/{}.py", self.dir_name(), slugify(script))
    }

    /// Scripts hidden while the card is collapsed
    pub fn hidden_scripts(&self) -> usize {
        self.scripts.len().saturating_sub(COLLAPSED_SCRIPTS)
    }

    /// Whether every third card (starting at the first) gets the octagon clip
    pub fn is_octagon(index: usize) -> bool {
        index % 3 == 0
    }
}

/// Lowercase and collapse whitespace runs into `_`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Total scripts across every category
pub fn total_scripts() -> usize {
    CATEGORIES.iter().map(|c| c.scripts.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("File Organizer", "file_organizer")]
    #[case("YouTube Downloader", "youtube_downloader")]
    #[case("Web  Scraping", "web_scraping")]
    #[case(" Media ", "media")]
    fn test_slugify(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATEGORIES.len(), 7);
        assert_eq!(TERMINAL_COMMANDS.len(), 7);
        assert_eq!(total_scripts(), 25);
    }

    #[test]
    fn test_script_invocation_uses_directory_slug() {
        let scraping = &CATEGORIES[2];
        assert_eq!(
            scraping.script_invocation("News Fetcher"),
            "python web_scraping/news_fetcher.py"
        );
    }

    #[test]
    fn test_hidden_scripts() {
        assert_eq!(CATEGORIES[0].hidden_scripts(), 2);
        assert_eq!(CATEGORIES[4].hidden_scripts(), 0);
        assert_eq!(CATEGORIES[6].hidden_scripts(), 0);
    }
}
