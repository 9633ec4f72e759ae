use super::list::UserFilter;
use crate::{error::JamfError, session::JamfSchool};
use common::users::User;
use log::info;

/// How the name fragments of a similar user lookup are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Both fragments must appear in the name
    All,
    /// Either fragment is enough
    Any,
}

/// Users whose display name contains the fragments.
///
/// Plain case sensitive substring matching. Spelling variants and diacritics
/// (`Müller` vs `Mueller`) are not treated as equal.
pub fn similar_users<'a>(
    users: &'a [User],
    first_name: &str,
    last_name: &str,
    mode: MatchMode,
) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| {
            let name = user.display_name();
            let mut fragments = [first_name, last_name].into_iter();
            match mode {
                MatchMode::All => fragments.all(|fragment| name.contains(fragment)),
                MatchMode::Any => fragments.any(|fragment| name.contains(fragment)),
            }
        })
        .collect()
}

impl JamfSchool {
    /// Reload the user cache with every user of the organisation
    pub fn refresh_users(&mut self) -> Result<(), JamfError> {
        let users = self.list_users(&UserFilter::default())?;
        info!("[jamf] Cached {} users", users.len());
        self.users = Some(users);
        Ok(())
    }

    /// Find users with a similar name. The user list is loaded on first use
    pub fn find_similar_users(
        &mut self,
        first_name: &str,
        last_name: &str,
        mode: MatchMode,
    ) -> Result<Vec<&User>, JamfError> {
        if self.users.is_none() {
            self.refresh_users()?;
        }

        let users = self.users.as_deref().unwrap_or_default();
        Ok(similar_users(users, first_name, last_name, mode))
    }
}
