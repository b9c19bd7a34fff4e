use super::models::{Category, Section, SectionBody, SectionId, SkillGroup, TimelineEntry};

pub struct Profile<'a> {
    pub owner: &'a str,
    pub tagline: &'a str,
    pub email: &'a str,
}

fn section(id: &str, title: &str, lines: Vec<String>) -> Section {
    Section::text(id, title, lines)
}

fn entry(company: &str, role: &str, period: &str, details: &[&str]) -> TimelineEntry {
    TimelineEntry {
        company: company.to_string(),
        role: role.to_string(),
        period: period.to_string(),
        details: lines(details),
    }
}

fn skill_group(category: Category, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category,
        items: lines(items),
    }
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

/// Page sections in display order.
#[must_use]
pub fn portfolio_sections(profile: &Profile<'_>) -> Vec<Section> {
    vec![
        section(
            "hero",
            "Home",
            vec![
                String::new(),
                format!("  {}", profile.owner),
                format!("  {}", profile.tagline),
                String::new(),
                "  Press Ctrl+K to jump anywhere on this page.".to_string(),
                String::new(),
            ],
        ),
        section(
            "about",
            "About",
            lines(&[
                "Engineer focused on dependable infrastructure and the tools",
                "that keep it observable. Comfortable anywhere between the",
                "kernel and the browser, happiest when a system gets simpler",
                "after a change rather than bigger.",
                "",
                "Outside of work: trail running, film photography and far too",
                "many mechanical keyboards.",
            ]),
        ),
        Section {
            id: SectionId::parse("experience"),
            title: "Experience".to_string(),
            body: SectionBody::Timeline(vec![
                entry(
                    "Northwind Systems",
                    "Staff Engineer, Platform",
                    "2021 - present",
                    &[
                        "Led the migration of 40+ services to a shared deploy pipeline.",
                        "Cut median build time by 62% and on-call pages by half.",
                    ],
                ),
                entry(
                    "Tracewell",
                    "Senior Engineer, Observability",
                    "2017 - 2021",
                    &[
                        "Built the tracing backend ingesting 1.2M spans per second.",
                        "Owned the alerting rules engine and its query language.",
                    ],
                ),
                entry(
                    "Ledgerline",
                    "Software Engineer, Payments",
                    "2014 - 2017",
                    &["Shipped the ledger reconciliation service and its tooling."],
                ),
            ]),
        },
        section(
            "projects",
            "Projects",
            lines(&[
                "logship    Zero-copy log forwarder with backpressure-aware batching.",
                "tinyq      Embedded persistent queue with crash-safe segments.",
                "folio      This page, rendered in your terminal.",
            ]),
        ),
        Section {
            id: SectionId::parse("skills"),
            title: "Skills".to_string(),
            body: SectionBody::Skills(vec![
                skill_group(
                    Category::Languages,
                    &["Rust", "Go", "TypeScript", "Python", "SQL"],
                ),
                skill_group(
                    Category::Infrastructure,
                    &["Kubernetes", "Terraform", "Nix", "Postgres", "Kafka"],
                ),
                skill_group(
                    Category::Observability,
                    &["OpenTelemetry", "Prometheus", "Grafana"],
                ),
            ]),
        },
        section(
            "contact",
            "Contact",
            vec![
                format!("Email     {}", profile.email),
                "Or open the palette and run \"Email\" to copy the address.".to_string(),
            ],
        ),
    ]
}
