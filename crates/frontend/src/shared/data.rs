//! Static page content. Everything here is fixed at build time; the
//! components only read it.

use contracts::enums::DemoTab;
use contracts::shared::{DemoContent, Feature, Objective, SocialLink};

use super::state::TabSet;

/// Anchor navigation shown in the navbar, in order
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#contact", "Contact Us"),
];

pub fn objectives() -> Vec<Objective> {
    vec![
        Objective {
            title: "AI-Powered Engine".to_string(),
            description: "Advanced machine learning algorithms that identify patterns and insights beyond human perception.".to_string(),
            icon: "ai-engine".to_string(),
            delay_ms: 300,
        },
        Objective {
            title: "Real-Time Stats".to_string(),
            description: "Instant performance metrics that update live during games and training sessions.".to_string(),
            icon: "realtime-stats".to_string(),
            delay_ms: 400,
        },
        Objective {
            title: "Player & Team Insights".to_string(),
            description: "Detailed analytics for individual player development and team strategy optimization.".to_string(),
            icon: "team-insights".to_string(),
            delay_ms: 500,
        },
        Objective {
            title: "Scalable for All Sports".to_string(),
            description: "Flexible platform adaptable to any sport, from soccer and basketball to tennis and beyond.".to_string(),
            icon: "all-sports".to_string(),
            delay_ms: 600,
        },
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "AI-Driven Insights".to_string(),
            description: "Our proprietary algorithms analyze movement patterns and performance indicators to provide actionable recommendations.".to_string(),
            icon: "ai-insights".to_string(),
        },
        Feature {
            title: "Real-Time Stat Tracking".to_string(),
            description: "Monitor key metrics during live games and practices, with instant updates and alerts for critical performance thresholds.".to_string(),
            icon: "stat-tracking".to_string(),
        },
        Feature {
            title: "Multi-Sport Support".to_string(),
            description: "Configurable metrics and analysis for a wide range of sports, from team-based to individual competitions.".to_string(),
            icon: "all-sports".to_string(),
        },
        Feature {
            title: "Mobile-Friendly Dashboard".to_string(),
            description: "Access insights anywhere with our responsive design that works on phones, tablets, and desktops.".to_string(),
            icon: "mobile-dashboard".to_string(),
        },
        Feature {
            title: "Performance Comparisons".to_string(),
            description: "Compare current performance to historical data, teammates, or industry benchmarks to identify areas for improvement.".to_string(),
            icon: "comparisons".to_string(),
        },
        Feature {
            title: "Continuous Learning Algorithms".to_string(),
            description: "Our system gets smarter with each use, adapting to player development and changing performance patterns.".to_string(),
            icon: "learning".to_string(),
        },
    ]
}

/// The demo tab set: one perspective per audience, athlete first.
pub fn demo_tabs() -> TabSet<DemoTab, DemoContent> {
    let entries = vec![
        (
            DemoTab::Athlete,
            DemoContent {
                title: "Athlete View".to_string(),
                description: "Track your personal performance metrics, training intensity, and progress over time.".to_string(),
                image: "https://images.unsplash.com/photo-1517649763962-0c623066013b?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=2340&q=80".to_string(),
            },
        ),
        (
            DemoTab::Coach,
            DemoContent {
                title: "Coach View".to_string(),
                description: "Monitor your team's overall performance, individual player stats, and strategic opportunities.".to_string(),
                image: "https://images.unsplash.com/photo-1519766304817-4f37bda74a26?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=2340&q=80".to_string(),
            },
        ),
        (
            DemoTab::Team,
            DemoContent {
                title: "Team View".to_string(),
                description: "Analyze team dynamics, opponent strategies, and collective performance trends.".to_string(),
                image: "https://images.unsplash.com/photo-1551958219-acbc608c6377?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=2340&q=80".to_string(),
            },
        ),
    ];
    TabSet::new(entries).expect("demo tabs are statically defined")
}

/// Highlights listed under the demo description, one per perspective set
pub const DEMO_HIGHLIGHTS: [&str; 3] = [
    "Performance Tracking",
    "Data Visualization",
    "Personalized Insights",
];

pub fn social_links() -> Vec<SocialLink> {
    ["twitter", "linkedin", "instagram", "youtube"]
        .into_iter()
        .map(|name| SocialLink {
            name: name.to_string(),
            url: format!("https://{name}.com"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tabs_default_to_athlete() {
        let tabs = demo_tabs();
        assert_eq!(tabs.active_key(), DemoTab::Athlete);
        assert_eq!(tabs.active_content().title, "Athlete View");
    }

    #[test]
    fn test_demo_tabs_cover_every_perspective() {
        let tabs = demo_tabs();
        assert_eq!(tabs.keys().collect::<Vec<_>>(), DemoTab::all());
        for tab in DemoTab::all() {
            assert!(tabs.content(tab).is_some());
        }
    }

    #[test]
    fn test_grids_are_populated() {
        assert_eq!(objectives().len(), 4);
        assert_eq!(features().len(), 6);
        assert_eq!(social_links().len(), 4);
    }
}
