use crate::model::user::UserDto;

/// The value, or `-` when blank
pub fn dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// `(id, "name (email)")` options for a user select
pub fn user_options(users: &[UserDto]) -> Vec<(String, String)> {
    users
        .iter()
        .map(|u| (u.id.clone(), format!("{} ({})", u.user_name, u.email)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_render_as_dash() {
        assert_eq!(dash("  "), "-");
        assert_eq!(dash("Lahore"), "Lahore");
    }

    #[test]
    fn user_options_show_name_and_email() {
        let users = vec![UserDto {
            id: "u1".to_string(),
            user_name: "sara".to_string(),
            email: "sara@urban.pk".to_string(),
            ..Default::default()
        }];
        assert_eq!(
            user_options(&users),
            vec![("u1".to_string(), "sara (sara@urban.pk)".to_string())]
        );
    }
}
