//! Search Reducer
//!
//! Applies session events to the search session. Rejected and ignored events
//! leave the session untouched; the search middleware reports them to the user.

use gh_search_session::{SearchSession, SessionEvent};

pub fn reduce(mut session: SearchSession, event: &SessionEvent) -> SearchSession {
    match session.apply(event.clone()) {
        Ok(transition) => log::trace!("Search transition: {:?}", transition),
        Err(e) => log::debug!("Search event rejected: {}", e),
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_search_session::{Page, SortColumn, Status};

    #[test]
    fn test_submit_then_complete() {
        let mut session = reduce(
            SearchSession::default(),
            &SessionEvent::SubmitSearch("tokio".into()),
        );
        let generation = session.in_flight().unwrap().generation;

        session = reduce(
            session,
            &SessionEvent::FetchSucceeded {
                generation,
                page: Page {
                    items: vec![],
                    total_count: 0,
                    end_cursor: None,
                    has_next_page: false,
                },
            },
        );

        assert_eq!(session.status(), Status::Loaded);
        assert_eq!(session.results(), Some(&[][..]));
    }

    #[test]
    fn test_rejected_event_keeps_session() {
        let before = reduce(
            SearchSession::default(),
            &SessionEvent::ChangeSort(SortColumn::Forks),
        );
        let after = reduce(before.clone(), &SessionEvent::SubmitSearch("x".into()));
        assert_eq!(after, before);
    }
}
