mod dto;
mod jwt_authorization_validator;
mod role;
mod util;

pub use dto::Caller;
pub use jwt_authorization_validator::JwtAuthorizationValidator;
pub use role::*;
pub use util::*;

#[cfg(test)]
pub use jwt_authorization_validator::test as test_utils;

use crate::error::Error;

///
/// Validates that caller has all required roles.
///
/// ### Errors
/// - [Error::MissingRole] when any of the roles is missing
///
pub fn require_all_roles(caller: &Caller, roles: &[Role]) -> Result<(), Error> {
    for role in roles {
        let role: &'static str = role.into();
        if !caller.roles.iter().any(|caller_role| caller_role == role) {
            return Err(Error::MissingRole(role));
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn require_roles_caller_has_role() {
        let caller = Caller::new(
            "eventarc-trigger".to_string(),
            vec![
                "first_other_application_role".to_string(),
                Role::TriggerNotifications.as_ref().to_string(),
            ],
        );

        let result = require_all_roles(&caller, &[Role::TriggerNotifications]);

        assert!(result.is_ok());
    }

    #[test]
    fn require_roles_caller_does_not_have_role() {
        let caller = Caller::new(
            "eventarc-trigger".to_string(),
            vec!["first_other_application_role".to_string()],
        );

        let result = require_all_roles(&caller, &[Role::TriggerNotifications]);

        assert!(matches!(
            result,
            Err(Error::MissingRole("comment_notifier_trigger"))
        ));
    }
}
