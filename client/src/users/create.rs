use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::{response::write_body, time::creation_timestamp},
};
use log::{error, info};
use rand::Rng;
use serde::Serialize;

/// Group reference accepted by `memberOf`. Unknown names are created by Jamf School
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GroupRef {
    Id(i64),
    Name(String),
}

/// Payload to create a user
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Must be unique within the organisation
    pub username: String,
    /// Generated when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_password: Option<bool>,
    /// Logon domain, for example an Active Directory domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Always sent. Jamf School requires the field but accepts it empty
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_of: Option<Vec<GroupRef>>,
    /// Groups this user manages in Jamf Teacher
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Vec<i64>>,
    /// Users this user manages in Jamf Parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Skip Teacher restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
    pub location_id: i64,
}

/// Random six digit password
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(111111..=999999).to_string()
}

impl NewUser {
    fn validate(&self) -> Result<(), JamfError> {
        let required = [
            ("username", &self.username),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                error!("[jamf] {field} is required to create a user");
                return Err(JamfError::MissingField(field));
            }
        }
        Ok(())
    }
}

impl JamfSchool {
    /// Create a user and return its username and password.
    ///
    /// Without a password a random one is generated. The API offers no way
    /// to read it back, so it is appended to the notes together with the
    /// creation time. Returns `None` when Jamf School rejects the user (for
    /// example `UsernameInUse` or `LocationNotFound`).
    pub fn create_user(&mut self, user: &NewUser) -> Result<Option<(String, String)>, JamfError> {
        user.validate()?;

        let mut payload = user.clone();
        if payload.email.is_none() {
            payload.email = Some(String::new());
        }

        let mut notes: Vec<String> = Vec::new();
        if let Some(existing) = user.notes.as_deref().filter(|text| !text.is_empty()) {
            notes.push(existing.to_string());
        }
        notes.push(format!("user_created: {}", creation_timestamp()));

        let password = match &user.password {
            Some(result) => result.clone(),
            None => {
                let generated = generate_password(&mut self.rng);
                info!("[jamf] Generated password for {}", user.username);
                notes.push(format!("PW: {generated}"));
                generated
            }
        };
        payload.password = Some(password.clone());
        payload.notes = Some(notes.join(" "));

        let res = self.send(self.post("users").json(&payload), "create user")?;
        if write_body(res, "create user")?.is_none() {
            error!("[jamf] Could not create user {}", user.username);
            return Ok(None);
        }

        info!("[jamf] Created user {}", user.username);
        Ok(Some((user.username.clone(), password)))
    }
}
