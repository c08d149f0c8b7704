use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const FALLBACK_TAG: &str = "Technology";

// checked in order, first match wins
const TAG_KEYWORDS: [(&str, &str); 3] = [
    ("ai", "AI"),
    ("blockchain", "Blockchain"),
    ("ar", "AR"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub stars: u32,
    pub views: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub github_link: &'static str,
    pub live_link: &'static str,
    pub metrics: Metrics,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
}

impl BlogPost {
    pub fn published(&self) -> Result<NaiveDate, DataError> {
        NaiveDate::parse_from_str(self.date, DATE_FORMAT)
            .map_err(|_| DataError::InvalidDate(self.date))
    }

    /// Display tag derived from the title.
    pub fn tag(&self) -> &'static str {
        classify_title(self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub connections: u32,
    pub endorsements: u32,
    pub avatar: &'static str,
}

impl ProfileInfo {
    /// Uppercased first letter of each word in the name, used when the avatar image is missing.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
}

impl Skill {
    pub const fn new(name: &'static str, level: u8) -> Self {
        let level = if level > 100 { 100 } else { level };
        Self { name, level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// Classifies a post title against the fixed keyword list, falling back to "Technology".
///
/// A keyword matches the start of a word, case-insensitively: "ARKit" and "AIs" are
/// tagged, while "Blockchain" is not tagged "AI" and "Learned" is not tagged "AR".
pub fn classify_title(title: &str) -> &'static str {
    let words = title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    TAG_KEYWORDS
        .iter()
        .find(|(keyword, _)| words.iter().any(|w| w.starts_with(*keyword)))
        .map(|(_, tag)| *tag)
        .unwrap_or(FALLBACK_TAG)
}

pub static PROFILE: ProfileInfo = ProfileInfo {
    name: "Jane Doe",
    title: "Full Stack Developer & AR Enthusiast",
    connections: 500,
    endorsements: 50,
    avatar: "/profile.png",
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "AI-Powered Task Manager",
        description:
            "A task management app that uses AI to prioritize and suggest optimal task ordering.",
        tools: &["React", "Node.js", "TensorFlow.js"],
        github_link: "https://github.com/username/ai-task-manager",
        live_link: "https://ai-task-manager.vercel.app",
        metrics: Metrics {
            stars: 120,
            views: 1500,
        },
        image: "/ai-task-manager.png",
    },
    Project {
        id: 2,
        title: "Blockchain Voting System",
        description: "A secure and transparent voting system built on blockchain technology.",
        tools: &["Solidity", "Ethereum", "Web3.js"],
        github_link: "https://github.com/username/blockchain-voting",
        live_link: "https://blockchain-voting.vercel.app",
        metrics: Metrics {
            stars: 89,
            views: 2200,
        },
        image: "/blockchain-voting.png",
    },
    Project {
        id: 3,
        title: "AR Interior Designer",
        description:
            "An augmented reality app for visualizing furniture and decor in real-time.",
        tools: &["Unity", "ARKit", "C#"],
        github_link: "https://github.com/username/ar-interior-designer",
        live_link: "https://ar-interior.vercel.app",
        metrics: Metrics {
            stars: 75,
            views: 1800,
        },
        image: "/interior-designer.png",
    },
];

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Lessons Learned from Building an AI Task Manager",
        date: "2023-06-15",
        excerpt: "Insights into integrating AI into web applications and optimizing performance.",
    },
    BlogPost {
        id: 2,
        title: "The Challenges of Developing a Blockchain Voting System",
        date: "2023-07-22",
        excerpt:
            "Overcoming security concerns and ensuring transparency in blockchain applications.",
    },
    BlogPost {
        id: 3,
        title: "Exploring the Future of AR in Interior Design",
        date: "2023-08-30",
        excerpt:
            "How augmented reality is revolutionizing the way we design and visualize spaces.",
    },
];

pub static SKILLS: &[Skill] = &[
    Skill::new("React", 90),
    Skill::new("Node.js", 85),
    Skill::new("TensorFlow.js", 75),
    Skill::new("Solidity", 70),
    Skill::new("Unity", 80),
    Skill::new("ARKit", 65),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_title_keywords() {
        assert_eq!(
            classify_title("The Challenges of Developing a Blockchain Voting System"),
            "Blockchain"
        );
        assert_eq!(classify_title("Rust for the rest of us"), "Technology");
        assert_eq!(classify_title("Why I wrote a compiler"), "Technology");
        assert_eq!(classify_title("SCALING AI"), "AI");
        assert_eq!(classify_title("An AR primer"), "AR");
    }

    #[test]
    fn test_classify_title_first_match_wins() {
        assert_eq!(classify_title("AI on the Blockchain"), "AI");
        assert_eq!(classify_title("Blockchain meets AR"), "Blockchain");
        assert_eq!(classify_title("AI-Powered Task Manager"), "AI");
    }

    #[test]
    fn test_classify_title_matches_word_prefixes() {
        assert_eq!(classify_title("ARKit Tips"), "AR");
        assert_eq!(classify_title("AIs at Work"), "AI");
        assert_eq!(classify_title("blockchains everywhere"), "Blockchain");
    }

    #[test]
    fn test_classify_title_ignores_keywords_inside_words() {
        assert_eq!(classify_title("Lessons Learned the Hard Way"), "Technology");
        assert_eq!(classify_title("Chained Maintainers"), "Technology");
        assert_eq!(classify_title("blockchain"), "Blockchain");
    }

    #[test]
    fn test_seeded_blog_tags() {
        let tags = BLOG_POSTS.iter().map(BlogPost::tag).collect::<Vec<_>>();
        assert_eq!(tags, vec!["AI", "Blockchain", "AR"]);
    }

    #[test]
    fn test_blog_dates_parse() {
        for post in BLOG_POSTS {
            assert!(post.published().is_ok(), "bad date on post {}", post.id);
        }
        let first = BLOG_POSTS[0].published().unwrap();
        assert_eq!(first.format("%d").to_string(), "15");
        assert_eq!(first.format("%B %Y").to_string(), "June 2023");
    }

    #[test]
    fn test_invalid_date() {
        let post = BlogPost {
            id: 99,
            title: "Broken",
            date: "June 15th",
            excerpt: "",
        };
        assert_eq!(post.published(), Err(DataError::InvalidDate("June 15th")));
    }

    #[test]
    fn test_profile_initials() {
        assert_eq!(PROFILE.initials(), "JD");
        let single = ProfileInfo {
            name: "cher",
            ..PROFILE
        };
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn test_skill_levels_bounded() {
        assert!(SKILLS.iter().all(|s| s.level() <= 100));
        assert_eq!(Skill::new("Overclocked", 150).level(), 100);
    }

    #[test]
    fn test_project_list_not_empty() {
        assert_eq!(PROJECTS.len(), 3);
        let ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
