//! The static HTML front-end served at `/ui`.
//!
//! The page talks to `/status`, `/prompts`, and `/random` from the browser.
//! The only server-side substitution is the configured title; nothing here
//! touches the store.

use axum::{
  extract::State,
  http::{HeaderValue, header},
  response::{IntoResponse, Response},
};
use n7_core::store::CatalogStore;

use crate::{AppState, response::no_store};

const TITLE_SLOT: &str = "{{TITLE}}";

const PAGE: &str = r##"<!doctype html>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{{TITLE}}</title>
<style>
:root{--pad:16px;--rad:12px;--fg:#111;--muted:#666;--bg:#fff;--card:#f5f5f7}
body{margin:0;font-family:-apple-system,system-ui,Segoe UI,Roboto,sans-serif;color:var(--fg);background:var(--bg)}
header{padding:var(--pad);font-weight:700;font-size:18px}
main{padding:var(--pad);display:grid;gap:12px}
.card{background:var(--card);border-radius:var(--rad);padding:14px 16px}
.row{display:flex;gap:8px;align-items:center;flex-wrap:wrap}
button,select{border-radius:10px;border:0;padding:10px 12px;background:#111;color:#fff;font-weight:600}
button.ghost{background:transparent;color:#111;border:1px solid #111}
code{background:#000;color:#0f0;padding:8px;border-radius:10px;display:block;white-space:pre-wrap}
.muted{color:var(--muted);font-size:12px}
.pill{padding:4px 8px;border-radius:999px;background:#111;color:#fff;font-size:12px}
.grid{display:grid;gap:8px;grid-template-columns:repeat(auto-fit,minmax(120px,1fr))}
</style>
<header>{{TITLE}}</header>
<main>
  <div class="card">
    <div class="row">
      <button id="btn-random">Random</button>
      <select id="tag-select"><option value="">All tags</option></select>
      <button class="ghost" id="btn-copy">Copy</button>
    </div>
    <div id="out" style="margin-top:10px;"><div class="muted">Tap Random to fetch a prompt.</div></div>
  </div>

  <div class="card" id="status"><div class="muted">Status loading…</div></div>

  <div class="card">
    <div class="muted">Categories</div>
    <div id="cats" class="grid"></div>
  </div>
</main>
<script>
const W = location.origin;

function esc(s){
  return String(s == null ? '' : s).replace(/[&<>"']/g, m => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[m]));
}

async function loadStatus(){
  const res = await fetch(W + '/status'); const j = await res.json();
  document.getElementById('status').innerHTML =
    '<div><b>' + esc(j.title) + '</b></div>' +
    '<div class="muted">Total: ' + esc(j.total) + ' • Updated: ' + esc(j.last_update || '—') + '</div>';
}

async function loadCatalog(){
  const res = await fetch(W + '/prompts'); const j = await res.json();
  const all = new Set();
  for (const items of Object.values(j.data)) for (const p of items) (p.tags || []).forEach(t => all.add(t));
  const sel = document.getElementById('tag-select');
  [...all].sort().forEach(t => {
    const o = document.createElement('option'); o.value = t; o.textContent = t; sel.appendChild(o);
  });
  document.getElementById('cats').innerHTML =
    Object.keys(j.data).map(c => '<span class="pill">' + esc(c) + '</span>').join(' ');
}

async function random(tag){
  const url = new URL(W + '/random'); if (tag) url.searchParams.set('tag', tag);
  const res = await fetch(url); const j = await res.json();
  const out = document.getElementById('out');
  out.innerHTML =
    '<div class="pill" style="margin-bottom:8px;">' + esc(j.category || 'prompt') + '</div>' +
    '<code>' + esc(j.prompt || j.error || JSON.stringify(j)) + '</code>' +
    (j.notes ? '<div class="muted">' + esc(j.notes) + '</div>' : '') +
    (j.tags && j.tags.length ? '<div class="muted">#' + j.tags.map(esc).join(' #') + '</div>' : '');
  out.dataset.text = j.prompt || '';
}

document.getElementById('btn-random').onclick = () => random(document.getElementById('tag-select').value);
document.getElementById('btn-copy').onclick = async () => {
  const t = document.getElementById('out').dataset.text || '';
  try { await navigator.clipboard.writeText(t); alert('Copied'); } catch { prompt('Copy', t); }
};

loadStatus(); loadCatalog();
</script>
"##;

/// Escape text for inclusion in HTML element content.
fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

/// Render the page with `title` substituted.
pub fn render(title: &str) -> String {
  PAGE.replace(TITLE_SLOT, &escape_html(title))
}

/// `GET /ui`
pub async fn page<S>(State(state): State<AppState<S>>) -> Response
where
  S: CatalogStore,
{
  (
    [
      (
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
      ),
      (header::CACHE_CONTROL, no_store()),
    ],
    render(&state.title),
  )
    .into_response()
}
