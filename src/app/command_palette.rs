use crate::domain::models::CommandItem;

#[must_use]
pub fn default_commands() -> Vec<CommandItem> {
    vec![
        CommandItem::navigate("Home", "Go to the top of the page", "#hero"),
        CommandItem::navigate("About", "Read the introduction", "#about"),
        CommandItem::navigate("Experience", "Browse the work history", "#experience"),
        CommandItem::navigate("Projects", "See selected projects", "#projects"),
        CommandItem::navigate("Skills", "View the tech stack", "#skills"),
        CommandItem::navigate("Contact", "Jump to contact details", "#contact"),
        CommandItem::copy_email("Email", "Copy email address"),
    ]
}

/// Indices of the items whose name or description contains `query`,
/// ignoring case, in declaration order.
#[must_use]
pub fn search_commands(items: &[CommandItem], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.matches(&query_lower))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CommandAction;

    #[test]
    fn test_empty_query_matches_everything() {
        let items = default_commands();
        assert_eq!(
            search_commands(&items, ""),
            (0..items.len()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_matches_name_or_description_any_case() {
        let items = default_commands();

        let hits = search_commands(&items, "COPY");
        assert_eq!(hits.len(), 1);
        assert_eq!(items[hits[0]].action, CommandAction::CopyEmail);

        // "top" only appears in the Home description
        let hits = search_commands(&items, "top");
        assert_eq!(hits, vec![0]);

        assert!(search_commands(&items, "zzz").is_empty());
    }

    #[test]
    fn test_visible_set_is_exactly_the_matching_items() {
        let items = default_commands();
        for query in ["", "e", "go", "ject", "EMAIL", "stack", "x", "the "] {
            let hits = search_commands(&items, query);
            let q = query.to_lowercase();
            for (i, item) in items.iter().enumerate() {
                let expected = item.name.to_lowercase().contains(&q)
                    || item.description.to_lowercase().contains(&q);
                assert_eq!(hits.contains(&i), expected, "query {query:?} item {i}");
            }
            assert!(hits.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
