//! View model for the repository details panel

use super::format_count;
use crate::state::AppState;
use gh_search_session::RepositoryItem;

#[derive(Debug, Clone)]
pub struct DetailsViewModel {
    pub title: String,
    pub body: DetailsBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsBody {
    /// Nothing selected
    Placeholder(String),
    Repository {
        name: String,
        description: String,
        /// Label/value pairs in display order
        fields: Vec<(&'static str, String)>,
    },
}

impl DetailsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let body = match state.search.selected() {
            Some(item) => Self::build_body(item),
            None => DetailsBody::Placeholder(
                "Select a repository (j/k or ↑/↓) to see its details".to_string(),
            ),
        };

        Self {
            title: " Details ".to_string(),
            body,
        }
    }

    fn build_body(item: &RepositoryItem) -> DetailsBody {
        let or_none = |value: Option<&String>| {
            value
                .cloned()
                .unwrap_or_else(|| "None".to_string())
        };
        let languages = if item.languages.is_empty() {
            "None".to_string()
        } else {
            item.languages.join(", ")
        };

        DetailsBody::Repository {
            name: item.name.clone(),
            description: item
                .description
                .clone()
                .unwrap_or_else(|| "No description".to_string()),
            fields: vec![
                ("Stars", format_count(item.star_count)),
                ("Forks", format_count(item.fork_count)),
                ("Language", or_none(item.primary_language.as_ref())),
                ("Languages", languages),
                ("License", or_none(item.license.as_ref())),
                (
                    "Updated",
                    item.updated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                ),
                ("ID", item.id.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gh_search_session::{Page, RepositoryId, SessionEvent};

    fn loaded_state(item: RepositoryItem) -> AppState {
        let mut state = AppState::default();
        state
            .search
            .apply(SessionEvent::SubmitSearch("tokio".into()))
            .unwrap();
        let generation = state.search.in_flight().unwrap().generation;
        state
            .search
            .apply(SessionEvent::FetchSucceeded {
                generation,
                page: Page {
                    items: vec![item],
                    total_count: 1,
                    end_cursor: None,
                    has_next_page: false,
                },
            })
            .unwrap();
        state
    }

    fn repo(description: Option<&str>, license: Option<&str>) -> RepositoryItem {
        RepositoryItem {
            id: RepositoryId::new("R_1"),
            name: "tokio".to_string(),
            primary_language: Some("Rust".to_string()),
            languages: vec!["Rust".to_string(), "Shell".to_string()],
            fork_count: 2_400,
            star_count: 26_000,
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
            description: description.map(String::from),
            license: license.map(String::from),
        }
    }

    #[test]
    fn test_placeholder_without_selection() {
        let state = loaded_state(repo(None, None));
        let vm = DetailsViewModel::from_state(&state);
        assert!(matches!(vm.body, DetailsBody::Placeholder(_)));
    }

    #[test]
    fn test_selected_repository_fields() {
        let mut state = loaded_state(repo(Some("Async runtime"), Some("MIT License")));
        state.search.select_item(&RepositoryId::new("R_1")).unwrap();

        let vm = DetailsViewModel::from_state(&state);
        let DetailsBody::Repository {
            name,
            description,
            fields,
        } = vm.body
        else {
            panic!("expected repository details");
        };

        assert_eq!(name, "tokio");
        assert_eq!(description, "Async runtime");
        assert!(fields.contains(&("Stars", "26.0k".to_string())));
        assert!(fields.contains(&("Languages", "Rust, Shell".to_string())));
        assert!(fields.contains(&("License", "MIT License".to_string())));
        assert!(fields.contains(&("Updated", "2024-05-01 08:30 UTC".to_string())));
    }

    #[test]
    fn test_missing_optional_fields() {
        let mut state = loaded_state(repo(None, None));
        state.search.select_item(&RepositoryId::new("R_1")).unwrap();

        let DetailsBody::Repository {
            description,
            fields,
            ..
        } = DetailsViewModel::from_state(&state).body
        else {
            panic!("expected repository details");
        };

        assert_eq!(description, "No description");
        assert!(fields.contains(&("License", "None".to_string())));
    }
}
