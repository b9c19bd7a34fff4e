use std::fmt;

/// Anchor of a page section, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SectionId(pub String);

impl SectionId {
    /// Accepts both `#about` and `about`.
    #[must_use]
    pub fn parse(anchor: &str) -> Self {
        Self(anchor.trim().trim_start_matches('#').to_string())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(SectionId),
    CopyEmail,
}

impl CommandAction {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CommandAction::Navigate(_) => "navigate",
            CommandAction::CopyEmail => "copy-email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    pub name: String,
    pub description: String,
    pub action: CommandAction,
}

impl CommandItem {
    pub fn navigate(name: &str, description: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            action: CommandAction::Navigate(SectionId::parse(target)),
        }
    }

    pub fn copy_email(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            action: CommandAction::CopyEmail,
        }
    }

    /// Case-insensitive substring match against name or description.
    /// `query_lower` must already be lowercased.
    #[must_use]
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

/// Tech-stack grouping shown in the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Languages,
    Infrastructure,
    Observability,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Languages,
        Category::Infrastructure,
        Category::Observability,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Languages => "languages",
            Category::Infrastructure => "infrastructure",
            Category::Observability => "observability",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Languages => "Languages",
            Category::Infrastructure => "Infrastructure",
            Category::Observability => "Observability",
        }
    }
}

/// Name used for a filter in analytics and on its button; `None` shows every category.
#[must_use]
pub fn filter_slug(filter: Option<Category>) -> &'static str {
    filter.map_or("all", Category::slug)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub details: Vec<String>,
}

impl TimelineEntry {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.company, self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: Category,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Text(Vec<String>),
    /// Collapsed to one row per entry; at most one entry shows its details.
    Timeline(Vec<TimelineEntry>),
    /// Filter bar, a blank row, then one row per shown group.
    Skills(Vec<SkillGroup>),
}

/// Interactive page state that changes how sections lay out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionView {
    pub expanded_entry: Option<usize>,
    pub skill_filter: Option<Category>,
}

impl SectionView {
    #[must_use]
    pub fn shows(&self, category: Category) -> bool {
        self.skill_filter.map_or(true, |f| f == category)
    }
}

/// One body row of a laid-out section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRow<'a> {
    Text(&'a str),
    EntryHeader {
        index: usize,
        entry: &'a TimelineEntry,
        expanded: bool,
    },
    EntryDetail(&'a str),
    FilterBar,
    Blank,
    SkillGroup(&'a SkillGroup),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    pub fn text(id: &str, title: &str, lines: Vec<String>) -> Self {
        Self {
            id: SectionId::parse(id),
            title: title.to_string(),
            body: SectionBody::Text(lines),
        }
    }

    fn body_rows(&self, view: &SectionView) -> usize {
        match &self.body {
            SectionBody::Text(lines) => lines.len(),
            SectionBody::Timeline(entries) => {
                let details = view
                    .expanded_entry
                    .and_then(|i| entries.get(i))
                    .map_or(0, |e| e.details.len());
                entries.len() + details
            }
            SectionBody::Skills(groups) => {
                2 + groups.iter().filter(|g| view.shows(g.category)).count()
            }
        }
    }

    /// Title row, body rows and one spacer row.
    #[must_use]
    pub fn height(&self, view: &SectionView) -> u16 {
        u16::try_from(self.body_rows(view))
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    /// Body rows as laid out under `view`, excluding title and spacer.
    #[must_use]
    pub fn rows(&self, view: &SectionView) -> Vec<SectionRow<'_>> {
        let mut rows = Vec::with_capacity(self.body_rows(view));
        match &self.body {
            SectionBody::Text(lines) => rows.extend(lines.iter().map(|l| SectionRow::Text(l))),
            SectionBody::Timeline(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    let expanded = view.expanded_entry == Some(index);
                    rows.push(SectionRow::EntryHeader {
                        index,
                        entry,
                        expanded,
                    });
                    if expanded {
                        rows.extend(entry.details.iter().map(|d| SectionRow::EntryDetail(d)));
                    }
                }
            }
            SectionBody::Skills(groups) => {
                rows.push(SectionRow::FilterBar);
                rows.push(SectionRow::Blank);
                rows.extend(
                    groups
                        .iter()
                        .filter(|g| view.shows(g.category))
                        .map(SectionRow::SkillGroup),
                );
            }
        }
        rows
    }

    #[must_use]
    pub fn timeline(&self) -> Option<&[TimelineEntry]> {
        match &self.body {
            SectionBody::Timeline(entries) => Some(entries),
            _ => None,
        }
    }
}
