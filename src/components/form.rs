//! Form components shared by the sign in and registration pages

use maud::{Markup, html};

/// Input field description
pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub kind: &'a str,
    pub autocomplete: &'a str,
}

impl<'a> Field<'a> {
    pub fn username() -> Self {
        Self {
            name: "username",
            label: "Username",
            kind: "text",
            autocomplete: "username",
        }
    }

    pub fn password(autocomplete: &'a str) -> Self {
        Self {
            name: "password",
            label: "Password",
            kind: "password",
            autocomplete,
        }
    }
}

/// Renders a labelled, required input
pub fn form_field(field: &Field<'_>) -> Markup {
    let id = format!("field-{}", field.name);
    html! {
        div class="form-field" {
            label for=(id) { (field.label) }
            input id=(id) name=(field.name) type=(field.kind)
                autocomplete=(field.autocomplete) required;
        }
    }
}

/// Renders a card holding a posting form
///
/// # Arguments
///
/// * `heading`: Card heading
/// * `action`: Absolute URL the form posts to
/// * `fields`: Inputs in display order
/// * `submit`: Submit button label
/// * `footer`: Markup below the form, usually a link to the sibling page
pub fn form_card(
    heading: &str,
    action: &str,
    fields: &[Field<'_>],
    submit: &str,
    footer: Markup,
) -> Markup {
    html! {
        main class="auth-card" {
            h1 class="auth-title" { (heading) }
            form class="auth-form" method="post" action=(action) {
                @for field in fields {
                    (form_field(field))
                }
                button type="submit" class="button-primary" { (submit) }
            }
            p class="auth-footer" { (footer) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_markup() {
        // Act
        let html = form_field(&Field::username()).into_string();

        // Assert
        assert!(html.contains("<label for=\"field-username\">Username</label>"));
        assert!(html.contains("name=\"username\""));
        assert!(html.contains("type=\"text\""));
        assert!(html.contains("required"));
    }

    #[test]
    fn test_form_card_posts_to_action() {
        // Act
        let html = form_card(
            "Sign in",
            "http://localhost:5000/login",
            &[Field::username(), Field::password("current-password")],
            "Sign in",
            html! { "footer" },
        )
        .into_string();

        // Assert
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("action=\"http://localhost:5000/login\""));
        assert!(html.contains("autocomplete=\"current-password\""));
        assert!(html.contains("<button type=\"submit\" class=\"button-primary\">Sign in</button>"));
    }
}
