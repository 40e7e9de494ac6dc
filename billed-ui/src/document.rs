use crate::router::Router;
use crate::views::View;

/// The single mount point the router owns, plus the few targeted updates
/// containers make without re-rendering.
pub trait DocumentMount {
    /// Replace the mounted markup and the active binding table
    fn mount(&self, view: &View);

    fn show_overlay(&self, markup: &str);

    fn hide_overlay(&self);

    /// Set the text content of the element tagged `hook`
    fn set_text(&self, hook: &str, text: &str);

    /// Empty the value of the input tagged `hook`
    fn clear_input(&self, hook: &str);

    /// Record `path` as the current location without reloading
    fn push_location(&self, path: &str);

    /// Route DOM events and location changes to `router`. Called once.
    fn install_listeners(&self, router: Router);
}
