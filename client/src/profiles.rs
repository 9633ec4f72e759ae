use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_list, read_body},
};
use common::profiles::Profile;

impl JamfSchool {
    /// Request every configuration profile from `/profiles`
    pub fn list_profiles(&self) -> Result<Vec<Profile>, JamfError> {
        let res = self.send(self.get("profiles"), "profile list")?;
        let body = read_body(res, "profile list")?;
        parse_list(&body, "profiles")
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::{auth_header, mock_session};
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;

    #[test]
    fn test_list_profiles() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/profiles")
                .header("authorization", auth_header());
            then.status(200).json_body(json!({
                "code": 200,
                "profiles": [
                    {
                        "id": 2555,
                        "locationId": 0,
                        "identifier": "com.zuludesk.MDM.iOS.86e383f458875997be55a0a7b494b17d",
                        "name": "Demo Profile A",
                        "description": "Test profile",
                        "platform": "iOS",
                        "type": {"value": "profile"},
                        "status": {"value": "active"},
                        "daysOfTheWeek": ["1", "2", "3"],
                        "useHolidays": true
                    },
                    {
                        "id": 2728,
                        "identifier": "com.zuludesk.MDM.iOS.8da185b41642945bd4be19c2feaf34ae",
                        "name": "VPP Invite Web Clip",
                        "platform": "universal"
                    }
                ]
            }));
        });

        let session = mock_session(&server);
        let result = session.list_profiles().unwrap();
        mock.assert();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].profile_type.as_deref(), Some("profile"));
        assert_eq!(result[0].status.as_deref(), Some("active"));
        assert_eq!(result[1].platform.as_deref(), Some("universal"));
    }

    #[test]
    #[should_panic(expected = "MissingKey")]
    fn test_list_profiles_missing_key() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/profiles");
            then.status(200).json_body(json!({"code": 200}));
        });

        let session = mock_session(&server);
        let _ = session.list_profiles().unwrap();
    }
}
