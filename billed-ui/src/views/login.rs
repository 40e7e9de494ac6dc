use super::{RenderContext, View};

/// Login screen. Authentication itself happens outside the client core, so
/// the view carries no bindings.
pub fn login_ui(_ctx: &RenderContext) -> View {
    let markup = concat!(
        r#"<div class="login-page">"#,
        r#"<div class="login-title">Billed</div>"#,
        r#"<form class="login-form" data-testid="form-employee">"#,
        "<h2>Employé</h2>",
        r#"<label for="employee-email-input">Votre email</label>"#,
        r#"<input type="email" data-testid="employee-email-input" placeholder="johndoe@email.com" required />"#,
        r#"<label for="employee-password-input">Mot de passe</label>"#,
        r#"<input type="password" data-testid="employee-password-input" placeholder="******" required />"#,
        r#"<button type="submit" class="btn btn-primary" data-testid="employee-login-button">Se connecter</button>"#,
        "</form>",
        r#"<form class="login-form" data-testid="form-admin">"#,
        "<h2>Administration</h2>",
        r#"<label for="admin-email-input">Votre email</label>"#,
        r#"<input type="email" data-testid="admin-email-input" placeholder="johndoe@email.com" required />"#,
        r#"<label for="admin-password-input">Mot de passe</label>"#,
        r#"<input type="password" data-testid="admin-password-input" placeholder="******" required />"#,
        r#"<button type="submit" class="btn btn-primary" data-testid="admin-login-button">Se connecter</button>"#,
        "</form>",
        "</div>"
    );
    View::new(markup.to_string(), Vec::new())
}
