/// Who an audit event is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    Session(String),
    NewUser(String),
    Unattributed,
}

impl Attribution {
    pub fn into_originator(self) -> Option<String> {
        match self {
            Attribution::Session(id) | Attribution::NewUser(id) => Some(id),
            Attribution::Unattributed => None,
        }
    }
}

/// The session user wins; a self-registration falls back to the id of the user
/// just created. Presence is `Some`, so an empty id still counts.
pub fn resolve_attribution(session_user_id: Option<&str>, new_user_id: Option<&str>) -> Attribution {
    match (session_user_id, new_user_id) {
        (Some(session), _) => Attribution::Session(session.to_string()),
        (None, Some(new_user)) => Attribution::NewUser(new_user.to_string()),
        (None, None) => Attribution::Unattributed,
    }
}

#[cfg(test)]
mod attribution_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("user-123"), Some("new-456"), Attribution::Session("user-123".into()))]
    #[case(Some("user-123"), None, Attribution::Session("user-123".into()))]
    #[case(None, Some("new-456"), Attribution::NewUser("new-456".into()))]
    #[case(None, None, Attribution::Unattributed)]
    fn it_should_resolve_the_originator_by_precedence(
        #[case] session_user_id: Option<&str>,
        #[case] new_user_id: Option<&str>,
        #[case] expected: Attribution,
    ) {
        assert_eq!(resolve_attribution(session_user_id, new_user_id), expected);
    }

    #[rstest]
    #[case(Attribution::Session("user-123".into()), Some("user-123"))]
    #[case(Attribution::NewUser("new-456".into()), Some("new-456"))]
    #[case(Attribution::Unattributed, None)]
    fn it_should_turn_the_attribution_into_an_originator(
        #[case] attribution: Attribution,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(attribution.into_originator().as_deref(), expected);
    }

    #[rstest]
    fn it_should_not_treat_an_empty_session_id_as_absent() {
        assert_eq!(
            resolve_attribution(Some(""), Some("new-456")),
            Attribution::Session(String::new())
        );
    }
}
