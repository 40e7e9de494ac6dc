use super::layout::{layout_bindings, with_layout};
use super::{escape_html, hooks, RenderContext, View};
use crate::error::StoreError;
use crate::routes::RouteName;

pub fn loading_page(ctx: &RenderContext, active: Option<RouteName>) -> View {
    let content = format!(r#"<div id="loading" data-testid="{}">Loading...</div>"#, hooks::LOADING);
    View::new(with_layout(ctx, active, &content), layout_bindings(ctx))
}

/// Initial view of the bills route while the list is fetched
pub fn bills_loading(ctx: &RenderContext) -> View {
    loading_page(ctx, Some(RouteName::Bills))
}

pub fn error_page(ctx: &RenderContext, active: Option<RouteName>, error: &StoreError) -> View {
    let content = format!(
        concat!(
            r#"<div class="error error-{kind}" data-testid="{hook}">"#,
            r#"<div class="error-title">Erreur</div>"#,
            r#"<div class="error-text">{message}</div>"#,
            "</div>"
        ),
        kind = error.kind(),
        hook = hooks::ERROR_MESSAGE,
        message = escape_html(error.message()),
    );
    View::new(with_layout(ctx, active, &content), layout_bindings(ctx))
}
