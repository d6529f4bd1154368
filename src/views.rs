use std::fmt::Write;

use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::utils::flash::Flash;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 960px; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: .4rem .6rem; text-align: left; }
.flash { padding: .6rem 1rem; margin-bottom: 1rem; border-radius: 4px; }
.flash.error { background: #fde2e2; }
.flash.success { background: #e2f7e2; }
.flash.info { background: #e2ecfd; }
.status.pending { color: #a66b00; }
.status.approved { color: #1e7b1e; }
.status.rejected { color: #b22222; }
label { display: block; margin-top: .6rem; }
"#;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                f.level,
                escape(f.text)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
{flash_html}
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn index_page(requests: &[LeaveRequest], flash: Option<Flash>) -> String {
    let mut body = String::from(r#"<p><a href="/add">New leave request</a></p>"#);

    if requests.is_empty() {
        body.push_str("<p>No leave requests yet.</p>");
        return layout("Leave Requests", flash, &body);
    }

    body.push_str(
        "<table>\n<tr><th>#</th><th>Name</th><th>Type</th><th>Start</th><th>End</th>\
         <th>Reason</th><th>Status</th><th>Actions</th></tr>\n",
    );
    for (position, req) in requests.iter().enumerate() {
        let mut actions = format!(
            r#"<a href="/edit/{position}">Edit</a> <a href="/delete/{position}">Delete</a>"#
        );
        if req.status == LeaveStatus::Pending {
            let _ = write!(
                actions,
                r#" <a href="/approve/{position}">Approve</a> <a href="/reject/{position}">Reject</a>"#
            );
        }
        let _ = writeln!(
            body,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="status {}">{}</td><td>{}</td></tr>"#,
            position + 1,
            escape(&req.name),
            escape(&req.leave_type),
            req.start_date,
            req.end_date,
            escape(&req.reason),
            req.status.as_ref().to_lowercase(),
            req.status,
            actions,
        );
    }
    body.push_str("</table>");

    layout("Leave Requests", flash, &body)
}

fn form(action: &str, submit: &str, req: Option<&LeaveRequest>) -> String {
    let (name, leave_type, start, end, reason) = match req {
        Some(r) => (
            escape(&r.name),
            escape(&r.leave_type),
            r.start_date.to_string(),
            r.end_date.to_string(),
            escape(&r.reason),
        ),
        None => Default::default(),
    };
    format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}"></label>
<label>Leave type <input type="text" name="leave_type" value="{leave_type}"></label>
<label>Start date <input type="date" name="start_date" value="{start}"></label>
<label>End date <input type="date" name="end_date" value="{end}"></label>
<label>Reason <textarea name="reason">{reason}</textarea></label>
<p><button type="submit">{submit}</button> <a href="/">Cancel</a></p>
</form>"#
    )
}

pub fn add_page(flash: Option<Flash>) -> String {
    layout("New Leave Request", flash, &form("/add", "Submit", None))
}

pub fn edit_page(position: usize, req: &LeaveRequest, flash: Option<Flash>) -> String {
    let action = format!("/edit/{position}");
    let mut body = format!(
        r#"<p>Status: <span class="status {}">{}</span></p>"#,
        req.status.as_ref().to_lowercase(),
        req.status
    );
    body.push_str(&form(&action, "Save", Some(req)));
    layout("Edit Leave Request", flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::flash::Notice;
    use chrono::NaiveDate;

    fn request(name: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            name: name.to_string(),
            leave_type: "Sick".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            reason: "flu".to_string(),
            status,
        }
    }

    #[test]
    fn escape_covers_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn index_lists_rows_with_position_links() {
        let html = index_page(
            &[
                request("Ann", LeaveStatus::Pending),
                request("<b>Bob</b>", LeaveStatus::Approved),
            ],
            None,
        );
        assert!(html.contains("/edit/0"));
        assert!(html.contains("/approve/0"));
        assert!(html.contains("/delete/1"));
        assert!(!html.contains("/approve/1"));
        assert!(html.contains("&lt;b&gt;Bob&lt;/b&gt;"));
        assert!(html.contains("2024-03-01"));
    }

    #[test]
    fn empty_index_says_so() {
        assert!(index_page(&[], None).contains("No leave requests yet."));
    }

    #[test]
    fn flash_is_rendered_with_its_level() {
        let html = add_page(Some(Flash::from(Notice::BadDateRange)));
        assert!(html.contains(r#"<div class="flash error">End date cannot be before start date!</div>"#));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let html = edit_page(2, &request("Ann", LeaveStatus::Rejected), None);
        assert!(html.contains(r#"action="/edit/2""#));
        assert!(html.contains(r#"value="Ann""#));
        assert!(html.contains(r#"value="2024-03-02""#));
        assert!(html.contains(">flu</textarea>"));
        assert!(html.contains("Rejected"));
    }
}
