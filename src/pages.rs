//! Page Catalogue
//!
//! The closed set of pages the dashboard can show, their navigation
//! entries, and the fixed content of the pages that do not depend on a
//! health report.

use std::fmt;
use std::str::FromStr;

/// Navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Projects,
    Reports,
    Analytics,
    Settings,
    Help,
    About,
}

/// Which part of the side navigation a page is listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Primary,
    Secondary,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Projects,
        Page::Reports,
        Page::Analytics,
        Page::Settings,
        Page::Help,
        Page::About,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Projects => "projects",
            Page::Reports => "reports",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
            Page::Help => "help",
            Page::About => "about",
        }
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Projects => "Projects",
            Page::Reports => "Reports",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
            Page::Help => "Help & Support",
            Page::About => "About",
        }
    }

    /// Header subtitle
    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Dashboard => "Project health monitoring and insights",
            _ => "Manage your project health",
        }
    }

    pub fn nav_icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::Projects => "📁",
            Page::Reports => "📈",
            Page::Analytics => "📉",
            Page::Settings => "⚙️",
            Page::Help => "❓",
            Page::About => "ℹ️",
        }
    }

    pub fn nav_section(&self) -> NavSection {
        match self {
            Page::Help | Page::About => NavSection::Secondary,
            _ => NavSection::Primary,
        }
    }

    /// Pages listed in one navigation section, in display order
    pub fn in_section(section: NavSection) -> impl Iterator<Item = Page> {
        Page::ALL.into_iter().filter(move |p| p.nav_section() == section)
    }

    /// Fixed content for pages that do not render live data
    pub fn static_content(&self) -> Option<StaticPage> {
        match self {
            Page::Dashboard | Page::Projects => None,
            Page::Reports => Some(REPORTS),
            Page::Analytics => Some(ANALYTICS),
            Page::Settings => Some(SETTINGS),
            Page::Help => Some(HELP),
            Page::About => Some(ABOUT),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page '{0}' (expected one of: dashboard, projects, reports, analytics, settings, help, about)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// How a static page lays out its cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Stacked cards
    List,
    /// Two-column grid of cards
    Grid,
    /// Cards with a colored left accent
    Accented,
}

/// One card on a static page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub heading: &'static str,
    pub body: &'static str,
    /// Button caption, if the card offers an action
    pub action: Option<&'static str>,
    /// Accent color name for accented layouts
    pub accent: Option<&'static str>,
}

/// Fixed content of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub heading: &'static str,
    /// Optional group title above the cards
    pub group: Option<&'static str>,
    pub layout: Layout,
    pub cards: &'static [Card],
}

pub const PRODUCT_NAME: &str = "AI-Powered 360° Project Health Monitor";

pub const PRODUCT_BLURB: &str = "A preventive AI system that identifies project risks, explains why they \
     are happening, and provides actionable recommendations before they impact the client.";

const fn card(heading: &'static str, body: &'static str) -> Card {
    Card { heading, body, action: None, accent: None }
}

pub const REPORTS: StaticPage = StaticPage {
    heading: "Reports",
    group: None,
    layout: Layout::List,
    cards: &[
        Card {
            action: Some("Generate Report"),
            ..card(
                "Weekly Health Report",
                "Comprehensive weekly analysis of all project health metrics",
            )
        },
        Card {
            action: Some("Generate Report"),
            ..card(
                "Risk Assessment Report",
                "Detailed analysis of project risks and mitigation strategies",
            )
        },
    ],
};

pub const ANALYTICS: StaticPage = StaticPage {
    heading: "Analytics",
    group: None,
    layout: Layout::Grid,
    cards: &[
        card("📈 Health Score Trends", "Track health score trends over time across all projects"),
        card("📊 Risk Distribution", "Analyze risk patterns and distribution across projects"),
        card("⚡ Team Performance", "Monitor team workload and performance metrics"),
        card("💬 Sentiment Analysis", "Track communication sentiment trends"),
    ],
};

pub const SETTINGS: StaticPage = StaticPage {
    heading: "Settings",
    group: Some("Health Score Configuration"),
    layout: Layout::List,
    cards: &[
        Card { action: Some("Edit"), ..card("Delivery Health Weight", "Current: 30%") },
        Card {
            action: Some("Configure"),
            ..card("Notification Preferences", "Email alerts for health score changes")
        },
    ],
};

pub const HELP: StaticPage = StaticPage {
    heading: "Help & Support",
    group: None,
    layout: Layout::Accented,
    cards: &[
        Card {
            accent: Some("blue"),
            ..card(
                "Getting Started",
                "Learn how to use the AI Project Health Monitor to track and improve your project health.",
            )
        },
        Card {
            accent: Some("green"),
            ..card(
                "Understanding Health Scores",
                "Health scores are calculated based on 5 key dimensions: Delivery, Workload, \
                 Sentiment, Risk, and Momentum.",
            )
        },
        Card {
            accent: Some("yellow"),
            ..card(
                "Contact Support",
                "Need help? Contact our support team at support@zeelai.com",
            )
        },
    ],
};

pub const ABOUT: StaticPage = StaticPage {
    heading: "About",
    group: None,
    layout: Layout::List,
    cards: &[
        card(PRODUCT_NAME, PRODUCT_BLURB),
        card("Version", env!("CARGO_PKG_VERSION")),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_content() {
        for page in Page::ALL {
            assert!(!page.title().is_empty());
            match page.static_content() {
                Some(content) => assert!(!content.cards.is_empty(), "{} has no cards", page),
                None => assert!(matches!(page, Page::Dashboard | Page::Projects)),
            }
        }
    }

    #[test]
    fn test_parse_round_trip_ids() {
        assert_eq!("Help".parse::<Page>().unwrap(), Page::Help);
        assert_eq!(" about ".parse::<Page>().unwrap(), Page::About);
        assert!("billing".parse::<Page>().is_err());
    }

    #[test]
    fn test_nav_sections() {
        let primary: Vec<_> = Page::in_section(NavSection::Primary).map(|p| p.id()).collect();
        assert_eq!(primary, vec!["dashboard", "projects", "reports", "analytics", "settings"]);

        let secondary: Vec<_> = Page::in_section(NavSection::Secondary).collect();
        assert_eq!(secondary, vec![Page::Help, Page::About]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::Help.title(), "Help & Support");
        assert_eq!(Page::Dashboard.subtitle(), "Project health monitoring and insights");
        assert_eq!(Page::Reports.subtitle(), "Manage your project health");
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
