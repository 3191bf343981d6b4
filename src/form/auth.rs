//! Login, self sign-up and the admin "Add User" form.

use chrono::NaiveDate;

use crate::{
    form::{is_blank, is_valid_email, require_choice, Draft, FieldErrors},
    model::{
        enums::{Choice, UserRole},
        user::{Credentials, NewUser},
    },
};

const MIN_PASSWORD_LEN: usize = 6;

fn check_email(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    if is_blank(raw) {
        errors.set("email", "Email is required");
        return None;
    }
    let email = raw.trim();
    if !is_valid_email(email) {
        errors.set("email", "Please enter a valid email");
        return None;
    }
    Some(email.to_string())
}

fn check_new_password(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    if is_blank(raw) {
        errors.set("password", "Password is required");
        return None;
    }
    if raw.chars().count() < MIN_PASSWORD_LEN {
        errors.set("password", "Password must be at least 6 characters");
        return None;
    }
    Some(raw.to_string())
}

fn check_user_name(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    super::require_text(errors, "userName", raw, "Username is required")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl Draft for LoginDraft {
    type Valid = Credentials;

    fn validate(&self, _today: NaiveDate) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.set("password", "Password is required");
        }

        errors.into_result()?;
        let Some(email) = email else {
            return Err(FieldErrors::new());
        };
        Ok(Credentials {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupDraft {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl Draft for SignupDraft {
    type Valid = NewUser;

    fn validate(&self, _today: NaiveDate) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        let user_name = check_user_name(&mut errors, &self.user_name);
        let email = check_email(&mut errors, &self.email);
        let password = check_new_password(&mut errors, &self.password);

        errors.into_result()?;
        let (Some(user_name), Some(email), Some(password)) = (user_name, email, password) else {
            return Err(FieldErrors::new());
        };
        Ok(NewUser {
            user_name,
            email,
            password,
            role: None,
        })
    }
}

/// Admin-side user creation; same as sign-up plus an explicit role
#[derive(Clone, Debug, PartialEq)]
pub struct AddUserDraft {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl Default for AddUserDraft {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::default().value().to_string(),
        }
    }
}

impl Draft for AddUserDraft {
    type Valid = NewUser;

    fn validate(&self, _today: NaiveDate) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        let user_name = check_user_name(&mut errors, &self.user_name);
        let email = check_email(&mut errors, &self.email);
        let password = check_new_password(&mut errors, &self.password);
        let role = require_choice::<UserRole>(&mut errors, "role", &self.role, "Role is required");

        errors.into_result()?;
        let (Some(user_name), Some(email), Some(password), Some(role)) =
            (user_name, email, password, role)
        else {
            return Err(FieldErrors::new());
        };
        Ok(NewUser {
            user_name,
            email,
            password,
            role: Some(role),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn login_requires_wellformed_email() {
        let draft = LoginDraft {
            email: "amir@urban".to_string(),
            password: String::new(),
        };
        let errors = draft.errors(today());
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn signup_password_length() {
        let draft = SignupDraft {
            user_name: "amir".to_string(),
            email: "amir@urban.pk".to_string(),
            password: "12345".to_string(),
        };
        assert_eq!(
            draft.errors(today()).get("password"),
            Some("Password must be at least 6 characters")
        );

        let ok = SignupDraft {
            password: "123456".to_string(),
            ..draft
        };
        let body = serde_json::to_value(ok.validate(today()).unwrap()).unwrap();
        assert_eq!(body["userName"], "amir");
        assert!(body.get("role").is_none());
    }

    #[test]
    fn add_user_defaults_to_user_role() {
        let draft = AddUserDraft {
            user_name: "sara".to_string(),
            email: "sara@urban.pk".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        };
        let user = draft.validate(today()).unwrap();
        assert_eq!(user.role, Some(UserRole::User));

        let blank_role = AddUserDraft {
            role: String::new(),
            ..draft
        };
        assert_eq!(blank_role.errors(today()).get("role"), Some("Role is required"));
    }
}
