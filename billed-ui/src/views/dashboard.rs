use super::layout::{layout_bindings, with_layout};
use super::{RenderContext, View};
use crate::routes::RouteName;

/// Landing screen for administrators
pub fn dashboard_ui(ctx: &RenderContext) -> View {
    let content = concat!(
        r#"<div class="content-header"><div class="content-title">Validations</div></div>"#,
        r#"<div class="dashboard-content" data-testid="dashboard"></div>"#
    );
    View::new(
        with_layout(ctx, Some(RouteName::Dashboard), content),
        layout_bindings(ctx),
    )
}
