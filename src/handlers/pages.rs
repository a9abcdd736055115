use axum::extract::State;
use axum::response::Html;

use crate::site_config::SiteConfig;
use crate::state::AppState;

const CLIENT_TEMPLATE: &str = include_str!("../../templates/client.html");
const ADMIN_TEMPLATE: &str = include_str!("../../templates/admin.html");

/// GET /: the customer page, themed from the presentation config.
pub async fn client(State(state): State<AppState>) -> Html<String> {
    Html(render_client(&state.site_config.get().await))
}

/// GET /admin
pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_TEMPLATE)
}

fn render_client(config: &SiteConfig) -> String {
    CLIENT_TEMPLATE
        .replace("{{bg_image}}", &css_escape(&config.bg_image))
        .replace("{{text_color}}", &css_escape(&config.text_color))
        .replace("{{glass_color}}", &css_escape(&config.glass_color))
}

/// Escapes a value placed inside the page's `<style>` block. Entities are not
/// decoded there, so CSS escapes are used instead.
fn css_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\3C "),
            '>' => out.push_str("\\3E "),
            '\n' => out.push_str("\\A "),
            '\r' => out.push_str("\\D "),
            _ => out.push(c),
        }
    }
    out
}
