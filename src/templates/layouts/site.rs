use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const SITE_CSS: &str = r#"
:root { --ink: #1f2937; --muted: #6b7280; --line: #e5e7eb; --accent: #0f766e; --bg: #f9fafb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: var(--ink); background: var(--bg); }
a { color: var(--accent); }
.muted { color: var(--muted); }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
.container { max-width: 1120px; margin: 0 auto; padding: 0 1rem; }
.site-header { background: #fff; border-bottom: 1px solid var(--line); }
.site-header .container { display: flex; align-items: center; justify-content: space-between; padding: .75rem 1rem; }
.site-header nav a { margin-left: 1rem; text-decoration: none; font-weight: 500; }
.hero { display: flex; gap: 1.5rem; align-items: center; padding: 2rem 0; }
.hero img { width: 112px; height: 112px; border-radius: 50%; object-fit: cover; }
.hero h1 { margin: 0 0 .25rem; }
.card { background: #fff; border: 1px solid var(--line); border-radius: 12px; padding: 1.25rem; margin: 1.5rem 0; }
.tabs { display: flex; gap: .5rem; flex-wrap: wrap; margin-bottom: 1rem; }
.tabs label { border: 1px solid var(--line); border-radius: 999px; padding: .35rem .9rem; cursor: pointer; background: #fff; }
.tabs input { position: absolute; opacity: 0; }
.tabs input:checked + span { color: var(--accent); font-weight: 600; }
.search-row { display: flex; gap: .5rem; }
.search-row input[type=search] { flex: 1; padding: .6rem .8rem; border: 1px solid var(--line); border-radius: 8px; }
.filter-panel { margin-top: .75rem; }
.filter-panel fieldset { border: 0; padding: 0; margin: .75rem 0; }
.filter-panel legend { font-weight: 600; margin-bottom: .25rem; }
.filter-panel label { margin-right: .75rem; white-space: nowrap; }
.btn { border: 1px solid var(--accent); background: var(--accent); color: #fff; border-radius: 8px; padding: .5rem 1rem; cursor: pointer; }
.btn.secondary { background: #fff; color: var(--accent); }
.listing-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.listing-card { background: #fff; border: 1px solid var(--line); border-radius: 12px; overflow: hidden; }
.listing-photo { position: relative; aspect-ratio: 4 / 3; background: var(--line); }
.listing-photo img { width: 100%; height: 100%; object-fit: cover; }
.listing-photo-missing { display: flex; height: 100%; align-items: center; justify-content: center; color: var(--muted); }
.badge { position: absolute; top: .5rem; left: .5rem; background: #fff; border-radius: 999px; padding: .1rem .6rem; font-size: .8rem; text-transform: capitalize; }
.listing-body { padding: .9rem; }
.listing-price { font-weight: 700; margin: 0 0 .25rem; }
.listing-title { font-size: 1rem; margin: 0 0 .25rem; }
.listing-facts { display: flex; gap: .75rem; list-style: none; padding: 0; margin: .5rem 0 0; color: var(--muted); font-size: .9rem; }
.result-count { margin: .5rem 0 1rem; }
.pager { display: flex; gap: .5rem; justify-content: center; margin: 1.5rem 0; }
.pager a, .pager span { padding: .35rem .75rem; border: 1px solid var(--line); border-radius: 6px; background: #fff; text-decoration: none; }
.pager .current { background: var(--accent); color: #fff; border-color: var(--accent); }
.placeholder { text-align: center; padding: 3rem 1rem; background: #fff; border: 1px dashed var(--line); border-radius: 12px; }
.htmx-request #listing-results { opacity: .5; }
.contact-list, .share-list { list-style: none; padding: 0; display: flex; gap: 1rem; flex-wrap: wrap; }
#share-url { width: 100%; padding: .5rem; border: 1px solid var(--line); border-radius: 6px; }
.site-footer { border-top: 1px solid var(--line); margin-top: 3rem; padding: 1.5rem 1rem; text-align: center; font-size: .9rem; }
@media (max-width: 640px) { .hero { flex-direction: column; text-align: center; } .site-header nav { display: none; } }
"#;

/// Page shell shared by every rendered page. CSS is inlined so an agent
/// site needs no static asset hosting.
pub fn site_layout(title: &str, description: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                    meta property="og:description" content=(description);
                }
                meta property="og:title" content=(title);
                style { (PreEscaped(SITE_CSS)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                (content)
            }
        }
    }
}
