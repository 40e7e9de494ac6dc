use super::{hooks, Action, Binding, EventKind, RenderContext};
use crate::routes::RouteName;

const ACTIVE_ICON_CLASS: &str = "active-icon";

/// Wrap `content` in the page layout with the vertical navbar.
///
/// `active` names the route whose icon is highlighted. Only that icon gets
/// the active class.
pub fn with_layout(ctx: &RenderContext, active: Option<RouteName>, content: &str) -> String {
    format!(
        r#"<div class="layout">{navbar}<div class="content">{content}</div></div>"#,
        navbar = vertical_navbar(ctx, active),
    )
}

pub fn vertical_navbar(ctx: &RenderContext, active: Option<RouteName>) -> String {
    let icons = if ctx.is_admin() {
        String::new()
    } else {
        format!(
            "{}{}",
            nav_icon("layout-icon1", hooks::ICON_WINDOW, "Mes notes de frais", active == Some(RouteName::Bills)),
            nav_icon("layout-icon2", hooks::ICON_MAIL, "Nouvelle note de frais", active == Some(RouteName::NewBill)),
        )
    };

    format!(
        concat!(
            r#"<div class="vertical-navbar">"#,
            r#"<div class="layout-title"><span class="layout-title">Billed</span></div>"#,
            "{icons}",
            r#"<div id="layout-disconnect" data-testid="{disconnect}" title="Se déconnecter">&#x23FB;</div>"#,
            "</div>"
        ),
        icons = icons,
        disconnect = hooks::LAYOUT_DISCONNECT,
    )
}

fn nav_icon(id: &str, hook: &str, title: &str, active: bool) -> String {
    let class = if active {
        format!(r#" class="{ACTIVE_ICON_CLASS}""#)
    } else {
        String::new()
    };
    format!(r#"<div id="{id}" data-testid="{hook}"{class} title="{title}"></div>"#)
}

/// Navbar bindings shared by every screen that renders the layout
pub fn layout_bindings(ctx: &RenderContext) -> Vec<Binding> {
    let mut bindings = vec![Binding::new(
        hooks::LAYOUT_DISCONNECT,
        EventKind::Click,
        Action::Logout,
    )];
    if !ctx.is_admin() {
        bindings.push(Binding::new(
            hooks::ICON_WINDOW,
            EventKind::Click,
            Action::Navigate(RouteName::Bills),
        ));
        bindings.push(Binding::new(
            hooks::ICON_MAIL,
            EventKind::Click,
            Action::Navigate(RouteName::NewBill),
        ));
    }
    bindings
}
