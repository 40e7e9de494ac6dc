use super::{escape_html, hooks, Action, Binding, EventKind, RenderContext, View};
use crate::routes::RouteName;

/// Fallback mounted for targets the route table does not know
pub fn not_found_ui(_ctx: &RenderContext, target: &str) -> View {
    let markup = format!(
        concat!(
            r#"<div class="not-found" data-testid="{hook}">"#,
            "<h1>Page introuvable</h1>",
            "<p>Aucune page ne correspond à « {target} ».</p>",
            r#"<button type="button" class="btn btn-primary" data-testid="{home}">Retour à l'accueil</button>"#,
            "</div>"
        ),
        hook = hooks::NOT_FOUND,
        target = escape_html(target),
        home = hooks::NOT_FOUND_HOME,
    );
    View::new(
        markup,
        vec![Binding::new(
            hooks::NOT_FOUND_HOME,
            EventKind::Click,
            Action::Navigate(RouteName::Login),
        )],
    )
}
