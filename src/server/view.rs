//! Server-rendered markup for the single pantry page.

use crate::core::state::PantryState;
use crate::domain::model::PantryEntry;

const STYLE: &str = "\
body{font-family:sans-serif;max-width:32rem;margin:2rem auto}\
.input-group{display:flex;gap:.5rem}\
.pantry-list{list-style:none;padding:0}\
.pantry-item{display:flex;align-items:center;gap:.5rem;padding:.4rem 0;transition:opacity .3s,transform .3s}\
.pantry-item.removing{opacity:0;transform:translateX(2rem)}\
.pantry-item .name{flex:1}\
.pantry-item form{display:inline}\
.expiry{color:#777;font-size:.85em}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn render_row(out: &mut String, entry: &PantryEntry) {
    let class = if entry.is_removing() {
        "pantry-item removing"
    } else {
        "pantry-item"
    };
    let name = escape(&entry.name);
    let expiry = match (entry.expiry_estimate, entry.best_before()) {
        (Some(days), Some(date)) => format!("~{} days (best before {})", days, date),
        _ => "shelf life unknown".to_string(),
    };

    out.push_str(&format!(
        "<li class=\"{class}\" data-id=\"{id}\">\
<span class=\"emoji\">{emoji}</span>\
<span class=\"name\">{qty} &times; {name} <span class=\"expiry\">{expiry}</span></span>\
<form method=\"post\" action=\"/items/{id}/remove\"><button aria-label=\"Remove all {name}\">-All</button></form>",
        id = entry.id,
        emoji = entry.emoji,
        qty = entry.display_quantity(),
    ));
    for (label, delta) in [("-1", "-1"), ("-0.5", "-0.5"), ("+1", "1")] {
        out.push_str(&format!(
            "<form method=\"post\" action=\"/items/{id}/adjust\">\
<input type=\"hidden\" name=\"delta\" value=\"{delta}\"><button>{label}</button></form>",
            id = entry.id,
        ));
    }
    out.push_str("</li>");
}

pub fn render_page(state: &PantryState) -> String {
    let mut out = String::from("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    // rows mid-removal vanish on the next load
    if state.entries().iter().any(PantryEntry::is_removing) {
        out.push_str("<meta http-equiv=\"refresh\" content=\"1\">");
    }
    out.push_str("<title>MyPantry</title><style>");
    out.push_str(STYLE);
    out.push_str("</style></head><body>");
    out.push_str("<div class=\"container\"><h1>MyPantry</h1>");
    out.push_str(
        "<form method=\"post\" action=\"/items\" class=\"input-group\">\
<input type=\"text\" name=\"quantity\" placeholder=\"Qty\" size=\"4\" class=\"pantry-input\">\
<input type=\"text\" name=\"name\" placeholder=\"Add an ingredient...\" class=\"pantry-input\">\
<button type=\"submit\" class=\"add-button\">Add</button></form>",
    );

    out.push_str("<ul class=\"pantry-list\">");
    for entry in state.entries() {
        render_row(&mut out, entry);
    }
    out.push_str("</ul></div></body></html>");
    out
}
