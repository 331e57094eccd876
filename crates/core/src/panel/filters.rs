//! Saved list filters for back-office views.
//!
//! Each session remembers the last filter query it used on a list
//! view. Arriving at the view from somewhere else restores that query;
//! opening the view plainly from inside itself clears it. This mirrors
//! how operators expect list pages to keep their filtering while they
//! hop between records.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::constants::SEARCH_QUERY_KEY;
use crate::{Error, Result};

/// Outcome of entering a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Serve the view with the query as given.
    Proceed,
    /// Redirect to the view carrying the previously saved query.
    Restore(Vec<(String, String)>),
}

/// In-memory store of saved filter queries, keyed by session and view.
#[derive(Debug, Default)]
pub struct SavedFilterStore {
    entries: RwLock<HashMap<(String, String), Vec<(String, String)>>>,
}

impl SavedFilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the saved-filter rules for one arrival at a list view.
    ///
    /// A query carrying recognized filter parameters is saved and served
    /// as-is. An empty query clears the saved entry when the operator
    /// navigated within the same view, and restores it when they arrived
    /// from elsewhere.
    pub fn on_enter(
        &self,
        session_id: &str,
        view: &str,
        query: &[(String, String)],
        came_from_same_view: bool,
        known_filters: &[&str],
    ) -> Result<FilterAction> {
        let key = (session_id.to_string(), view.to_string());

        if !query.is_empty() {
            let relevant: Vec<(String, String)> = query
                .iter()
                .filter(|(name, _)| is_filter_param(name, known_filters))
                .cloned()
                .collect();
            if !relevant.is_empty() {
                self.write_entries()?.insert(key, relevant);
            }
            return Ok(FilterAction::Proceed);
        }

        if came_from_same_view {
            self.write_entries()?.remove(&key);
            return Ok(FilterAction::Proceed);
        }

        match self.read_entries()?.get(&key) {
            Some(saved) => Ok(FilterAction::Restore(saved.clone())),
            None => Ok(FilterAction::Proceed),
        }
    }

    /// Returns the query currently saved for a view, if any.
    pub fn saved_query(&self, session_id: &str, view: &str) -> Result<Option<Vec<(String, String)>>> {
        let key = (session_id.to_string(), view.to_string());
        Ok(self.read_entries()?.get(&key).cloned())
    }

    /// Drops every saved query of one session.
    pub fn clear_session(&self, session_id: &str) -> Result<()> {
        self.write_entries()?
            .retain(|(session, _), _| session != session_id);
        Ok(())
    }

    fn read_entries(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<(String, String), Vec<(String, String)>>>>
    {
        self.entries
            .read()
            .map_err(|_| Error::Unexpected("Saved filter store lock poisoned".to_string()))
    }

    fn write_entries(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<(String, String), Vec<(String, String)>>>>
    {
        self.entries
            .write()
            .map_err(|_| Error::Unexpected("Saved filter store lock poisoned".to_string()))
    }
}

/// Whether a query parameter belongs to the view's filtering state.
///
/// Matches the search box key, a known filter name, or a lookup on a
/// known filter name such as `date__gte`.
fn is_filter_param(name: &str, known_filters: &[&str]) -> bool {
    if name == SEARCH_QUERY_KEY {
        return true;
    }
    known_filters.iter().any(|filter| {
        name.strip_prefix(filter)
            .map_or(false, |rest| rest.is_empty() || rest.starts_with("__"))
    })
}
