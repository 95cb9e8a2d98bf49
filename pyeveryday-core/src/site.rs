//! Document head metadata

use serde_json::{json, Value};

/// SEO and social metadata for the page head
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub url: &'static str,
    pub theme_color: &'static str,
    pub og_image: &'static str,
    pub twitter_creator: &'static str,
}

pub const SITE: SiteMetadata = SiteMetadata {
    name: "PyEveryday",
    title: "PyEveryday - Automate Your Daily Tasks with Python",
    description: "A comprehensive collection of Python scripts designed to simplify your daily routine. From automation to productivity tools, streamline your workflow with PyEveryday.",
    keywords: &[
        "Python",
        "automation",
        "scripts",
        "productivity",
        "tools",
        "open source",
        "utilities",
        "web scraping",
        "data processing",
    ],
    author: "Vaibhav2154",
    url: "https://github.com/Vaibhav2154/PyEveryday",
    theme_color: "#3b82f6",
    og_image: "/og-image.png",
    twitter_creator: "@vaibhav2154",
};

/// Font families loaded from Google Fonts
pub const FONTS_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:ital,opsz,wght@0,14..32,100..900;1,14..32,100..900&family=JetBrains+Mono:ital,wght@0,100..800;1,100..800&display=swap";

/// Origins worth a preconnect hint
pub const PRECONNECT: [&str; 3] = [
    "https://fonts.googleapis.com",
    "https://fonts.gstatic.com",
    "https://github.com",
];

impl SiteMetadata {
    pub fn keywords_csv(&self) -> String {
        self.keywords.join(", ")
    }

    /// `(property, content)` pairs for Open Graph and Twitter cards
    pub fn social_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("og:title", self.title.to_string()),
            ("og:description", self.description.to_string()),
            ("og:url", self.url.to_string()),
            ("og:site_name", self.name.to_string()),
            ("og:image", self.og_image.to_string()),
            ("og:locale", "en_US".to_string()),
            ("og:type", "website".to_string()),
            ("twitter:card", "summary_large_image".to_string()),
            ("twitter:title", self.title.to_string()),
            ("twitter:description", self.description.to_string()),
            ("twitter:image", self.og_image.to_string()),
            ("twitter:creator", self.twitter_creator.to_string()),
        ]
    }

    /// schema.org `SoftwareApplication` description
    pub fn structured_data(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": self.name,
            "description": self.description,
            "url": self.url,
            "author": {
                "@type": "Person",
                "name": self.author,
            },
            "programmingLanguage": "Python",
            "operatingSystem": "Cross-platform",
            "applicationCategory": "DeveloperApplication",
            "offers": {
                "@type": "Offer",
                "price": "0",
                "priceCurrency": "USD",
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_structured_data() {
        let data = SITE.structured_data();
        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["author"]["name"], "Vaibhav2154");
        assert_eq!(data["offers"]["price"], "0");
    }

    #[test]
    fn test_social_tags_cover_both_cards() {
        let tags = SITE.social_tags();
        assert!(tags.iter().any(|(k, _)| *k == "og:title"));
        assert!(tags
            .iter()
            .any(|(k, v)| *k == "twitter:card" && v == "summary_large_image"));
    }
}
