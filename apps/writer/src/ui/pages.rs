//! Server-rendered HTML for the single writer page.

use crate::generation::tone::Tone;
use crate::session::Session;

pub const TITLE: &str = "AI-Based Blogpost Writer";
pub const INCORRECT_PASSCODE: &str = "Incorrect passcode. Please try again.";

/// Renders the page for the session's current state. `error` is shown inline
/// above the passcode form.
pub fn writer_page(session: &Session, error: Option<&str>) -> String {
    let body = if session.is_authenticated() {
        writer_form(session)
    } else {
        passcode_form(error)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <main>
        <h1>{title}</h1>
{body}
    </main>
</body>
</html>"#,
        title = TITLE,
        css = CSS,
        body = body,
    )
}

fn passcode_form(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!(r#"        <p class="error">{}</p>"#, escape_html(msg)))
        .unwrap_or_default();

    format!(
        r#"        <form method="post" action="/authenticate" class="passcode">
            <label for="passcode">Enter Passcode</label>
            <input type="password" id="passcode" name="passcode" autofocus>
            <button type="submit">Authenticate</button>
        </form>
{error_html}"#
    )
}

fn writer_form(session: &Session) -> String {
    let skeleton_html = session
        .skeleton
        .as_deref()
        .map(|skeleton| {
            format!(
                r#"            <label for="skeleton">Skeleton/Summary of the Blogpost</label>
            <textarea id="skeleton" name="skeleton" rows="10">{}</textarea>
"#,
                escape_html(skeleton)
            )
        })
        .unwrap_or_default();

    let tone_html: String = Tone::ALL
        .iter()
        .map(|&tone| {
            let checked = if tone == session.tone { " checked" } else { "" };
            format!(
                r#"                <label><input type="radio" name="tone" value="{label}"{checked}> {label}</label>
"#,
                label = escape_html(tone.label()),
            )
        })
        .collect();

    let blogpost_html = session
        .blogpost
        .as_deref()
        .map(|blogpost| {
            format!(
                r#"        <label for="blogpost">Blogpost</label>
        <textarea id="blogpost" rows="15" readonly>{}</textarea>
"#,
                escape_html(blogpost)
            )
        })
        .unwrap_or_default();

    format!(
        r#"        <h2>Input Section</h2>
        <form method="post" action="/skeleton">
            <h3>Material</h3>
            <label for="field_of_work">Field of Work</label>
            <input type="text" id="field_of_work" name="field_of_work" value="{field_of_work}">
            <label for="example_posts">Example Blogposts</label>
            <textarea id="example_posts" name="example_posts" rows="6">{example_posts}</textarea>
            <button type="submit">Generate Skeleton/Summary of the Blogpost</button>
        </form>
        <form method="post" action="/blogpost">
{skeleton_html}            <h3>Tone</h3>
            <fieldset>
                <legend>Select a tone:</legend>
{tone_html}            </fieldset>
            <h2>Generated Blogpost</h2>
            <button type="submit">Generate Blogpost</button>
        </form>
{blogpost_html}"#,
        field_of_work = escape_html(&session.field_of_work),
        example_posts = escape_html(&session.example_posts),
    )
}

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const CSS: &str = r#"        body { font-family: system-ui, sans-serif; background: #f7f7f8; color: #1f2328; }
        main { max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
        label { display: block; margin-top: 1rem; font-weight: 600; }
        fieldset label { font-weight: normal; margin-top: 0.25rem; }
        input[type=text], input[type=password], textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; font: inherit; }
        button { margin-top: 1rem; padding: 0.5rem 1rem; }
        .error { color: #b42318; background: #fef3f2; padding: 0.5rem; border-radius: 4px; }"#;
