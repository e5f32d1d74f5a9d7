//! Server-side rendering of the dashboard page.

use crate::core::logic::Dashboard;
use crate::export::get_headers;
use crate::models::{SlotState, SlotStatus};
use crate::utils::date::format_date;
use crate::web::query::ALL_DATES;
use std::fmt::Write;

const TITLE: &str = "System Monitoring Dashboard";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 16rem; padding: 1rem; background: #f0f2f6; min-height: 100vh; }
aside label, aside fieldset { display: block; margin-bottom: 1rem; }
main { flex: 1; padding: 1rem 2rem; }
table { border-collapse: collapse; margin-bottom: 2rem; }
th, td { border: 1px solid #ddd; padding: 0.3rem 0.6rem; text-align: left; vertical-align: top; }
.metrics { display: flex; gap: 3rem; margin-bottom: 2rem; }
.metric .value { font-size: 2rem; }
.running { background-color: #ff6961; }
.free { background-color: #77dd77; }
"#;

/// HTML-escape text for element content and attribute values.
pub(crate) fn escape(s: &str) -> String {
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

fn status_class(state: SlotState) -> &'static str {
    match state {
        SlotState::Running => "running",
        SlotState::Free => "free",
    }
}

pub(crate) fn render_dashboard(d: &Dashboard, accepted: &[SlotState]) -> String {
    let mut html = String::with_capacity(16 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    );

    render_filters(&mut html, d, accepted);

    let _ = write!(html, "<main>\n<h1>{TITLE}</h1>\n");
    render_summary(&mut html, d);
    render_calendar(&mut html, &d.slots);
    render_details(&mut html, d);
    render_download(&mut html, d);
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn render_filters(html: &mut String, d: &Dashboard, accepted: &[SlotState]) {
    html.push_str("<aside>\n<h2>Filters</h2>\n<form method=\"get\" action=\"/\">\n");

    // source selector, "All" first
    html.push_str("<label>Select IP<br><select name=\"ip\">\n<option value=\"\">All</option>\n");
    for src in &d.sources {
        let selected = if d.source_id.as_deref() == Some(src.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape(src)
        );
    }
    html.push_str("</select></label>\n");

    let date_value = d.date.as_ref().map(format_date).unwrap_or_default();
    let _ = writeln!(
        html,
        "<label>Select Date<br><input type=\"date\" name=\"date\" value=\"{date_value}\"></label>"
    );

    // the hidden empty value marks the status filter as submitted
    html.push_str(
        "<fieldset>\n<legend>Filter by Status</legend>\n\
         <input type=\"hidden\" name=\"status\" value=\"\">\n",
    );
    for state in SlotState::ALL {
        let checked = if accepted.contains(&state) { " checked" } else { "" };
        let _ = writeln!(
            html,
            "<label><input type=\"checkbox\" name=\"status\" value=\"{state}\"{checked}> {state}</label>"
        );
    }
    html.push_str("</fieldset>\n");

    html.push_str("<button type=\"submit\">🔄 Refresh Now</button>\n</form>\n</aside>\n");
}

fn render_summary(html: &mut String, d: &Dashboard) {
    html.push_str("<h3>📊 Summary</h3>\n<div class=\"metrics\">\n");
    for (label, value) in [
        ("Total Scripts", d.summary.total),
        ("Completed", d.summary.completed),
        ("Running", d.summary.running),
    ] {
        let _ = writeln!(
            html,
            "<div class=\"metric\"><div class=\"label\">{label}</div><div class=\"value\">{value}</div></div>"
        );
    }
    html.push_str("</div>\n");
}

fn render_calendar(html: &mut String, slots: &[SlotStatus]) {
    html.push_str(
        "<h2>Daily System Activity</h2>\n<table class=\"calendar\">\n\
         <thead><tr><th>Time Slot</th><th>Status</th><th>Programs</th></tr></thead>\n<tbody>\n",
    );

    for slot in slots {
        let programs = slot.scripts_display();
        let cell = escape(&programs).replace('\n', "<br>");
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td class=\"{}\">{}</td><td title=\"{}\">{}</td></tr>",
            escape(&slot.label),
            status_class(slot.status),
            slot.status,
            escape(&programs),
            cell
        );
    }

    html.push_str("</tbody>\n</table>\n");
}

fn render_details(html: &mut String, d: &Dashboard) {
    html.push_str("<h2>Detailed Program Data</h2>\n<table class=\"events\">\n<thead><tr>");
    for h in get_headers() {
        let _ = write!(html, "<th>{h}</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for ev in &d.events {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&ev.source_id),
            escape(&ev.script_path),
            ev.start_str(),
            ev.end_str(),
            ev.duration()
        );
    }

    html.push_str("</tbody>\n</table>\n");
}

fn render_download(html: &mut String, d: &Dashboard) {
    let ip = d.source_id.as_deref().map(escape).unwrap_or_default();
    let date = d
        .date
        .as_ref()
        .map(format_date)
        .unwrap_or_else(|| ALL_DATES.to_string());

    let _ = write!(
        html,
        "<form method=\"get\" action=\"/export.csv\">\n\
         <input type=\"hidden\" name=\"ip\" value=\"{ip}\">\n\
         <input type=\"hidden\" name=\"date\" value=\"{date}\">\n\
         <button type=\"submit\">📥 Download Data</button>\n</form>\n"
    );
}
