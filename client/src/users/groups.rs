use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_list, read_body, vendor_message, write_body},
};
use common::groups::{GroupAcl, UserGroup};
use log::{error, info};
use serde::Serialize;

/// Payload to create a user group
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUserGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<GroupAcl>,
}

impl JamfSchool {
    /// List every user group
    pub fn list_user_groups(&self) -> Result<Vec<UserGroup>, JamfError> {
        let res = self.send(self.get("users/groups"), "user group list")?;
        let body = read_body(res, "user group list")?;
        parse_list(&body, "groups")
    }

    /// Create a user group. Returns false if Jamf School rejected it
    pub fn create_user_group(&self, group: &NewUserGroup) -> Result<bool, JamfError> {
        if group.name.is_empty() {
            error!("[jamf] name is required to create a user group");
            return Err(JamfError::MissingField("name"));
        }

        let res = self.send(self.post("users/groups").json(group), "create user group")?;
        match write_body(res, "create user group")? {
            Some(body) => {
                info!("[jamf] User group {}: {}", group.name, vendor_message(&body));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NewUserGroup;
    use crate::session::tests::{auth_header, mock_session};
    use common::groups::{AclSetting, GroupAcl};
    use httpmock::{
        Method::{GET, POST},
        MockServer,
    };
    use serde_json::json;

    #[test]
    fn test_list_user_groups() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/groups")
                .header("authorization", auth_header());
            then.status(200).json_body(json!({
                "code": 200,
                "count": 2,
                "groups": [
                    {
                        "id": 11,
                        "locationId": 3,
                        "name": "Lehrer",
                        "description": "",
                        "userCount": 35,
                        "acl": [{"teacher": "allow", "parent": "inherit"}],
                        "modified": "2023-09-01 07:30:00"
                    },
                    {"id": 12, "name": "Klasse 7b", "acl": []}
                ]
            }));
        });

        let session = mock_session(&server);
        let result = session.list_user_groups().unwrap();
        mock.assert();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].acl.as_ref().unwrap().teacher, AclSetting::Allow);
        assert!(result[1].acl.is_none());
    }

    #[test]
    fn test_create_user_group() {
        let server = MockServer::start();
        let mut acl = GroupAcl::default();
        acl.as_teacher();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/users/groups")
                .json_body_partial(r#"{"name": "Lehrer", "locationId": 3, "acl": {"teacher": "allow", "parent": "inherit"}}"#);
            then.status(200).json_body(json!({"code": 200, "message": "GroupCreated"}));
        });

        let group = NewUserGroup {
            name: String::from("Lehrer"),
            location_id: 3,
            acl: Some(acl),
            ..Default::default()
        };
        let session = mock_session(&server);
        assert!(session.create_user_group(&group).unwrap());
        mock.assert();
    }

    #[test]
    fn test_create_user_group_rejected() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/users/groups");
            then.status(400).json_body(json!({"code": 400, "message": "GroupNameInUse"}));
        });

        let group = NewUserGroup {
            name: String::from("Lehrer"),
            ..Default::default()
        };
        let session = mock_session(&server);
        assert!(!session.create_user_group(&group).unwrap());
        mock.assert();
    }
}
