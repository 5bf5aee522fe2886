//! Server-side HTML rendering
//!
//! The page has one form and, after a submission, either an error banner or
//! two panels: the prediction and an SVG bar chart of class probabilities.

use emotext_classifiers::Analysis;
use emotext_core::Distribution;
use std::fmt::Write;

/// What the page shows
#[derive(Debug, Clone)]
pub enum View {
    /// Empty form
    AwaitingSubmission,
    /// Submission could not be analyzed
    Error { text: String, message: String },
    /// Submission analyzed
    Result(Analysis),
}

/// Category palette, cycled by class position
const PALETTE: &[&str] = &[
    "#4c78a8", "#f58518", "#e45756", "#72b7b2", "#54a24b", "#eeca3b", "#b279a2", "#ff9da6",
    "#9d755d", "#bab0ac",
];

const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 72.0;

pub fn render_page(view: &View) -> String {
    let submitted = match view {
        View::AwaitingSubmission => "",
        View::Error { text, .. } => text.as_str(),
        View::Result(analysis) => analysis.text.as_str(),
    };

    let mut body = String::new();
    body.push_str(&render_form(submitted));

    match view {
        View::AwaitingSubmission => {}
        View::Error { message, .. } => {
            let _ = write!(
                body,
                r#"<div class="banner error" role="alert">{}</div>"#,
                escape_html(message)
            );
        }
        View::Result(analysis) => body.push_str(&render_result(analysis)),
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Text Emotion Detection</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <main class="container">
        <h1>Text Emotion Detection</h1>
        <h2 class="subtitle">Detect Emotions In Text</h2>
{body}
    </main>
</body>
</html>
"#
    )
}

fn render_form(text: &str) -> String {
    format!(
        r#"        <form method="post" action="/" class="card">
            <label for="text">Type Here</label>
            <textarea id="text" name="text" rows="6">{}</textarea>
            <button type="submit">Submit</button>
        </form>
"#,
        escape_html(text)
    )
}

fn render_result(analysis: &Analysis) -> String {
    format!(
        r#"        <div class="columns">
            <section class="card">
                <h3 class="success">Original Text</h3>
                <p class="original">{text}</p>
                <h3 class="success">Prediction</h3>
                <p class="prediction">{prediction}</p>
                <p class="confidence">Confidence:{confidence}</p>
            </section>
            <section class="card">
                <h3 class="success">Prediction Probability</h3>
{chart}
            </section>
        </div>
"#,
        text = escape_html(&analysis.text),
        prediction = escape_html(&analysis.prediction_line()),
        confidence = analysis.confidence,
        chart = render_chart(&analysis.distribution),
    )
}

/// Vertical bar chart: one bar per class in class order, y axis fixed to [0, 1]
pub fn render_chart(distribution: &Distribution) -> String {
    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;
    let slot = plot_width / distribution.len().max(1) as f64;
    let bar_width = slot * 0.8;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg class="chart" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}" role="img" aria-label="Prediction probability by emotion">"#
    );

    for tick in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let y = baseline - tick * plot_height;
        let _ = writeln!(
            svg,
            r##"<line class="grid" x1="{MARGIN_LEFT}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#ddd"/><text class="tick" x="{tx:.2}" y="{ty:.2}" text-anchor="end">{tick:.2}</text>"##,
            x2 = CHART_WIDTH - MARGIN_RIGHT,
            tx = MARGIN_LEFT - 6.0,
            ty = y + 4.0,
        );
    }

    for (i, entry) in distribution.iter().enumerate() {
        let probability = entry.probability.clamp(0.0, 1.0);
        let height = probability * plot_height;
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let label_x = x + bar_width / 2.0;
        let label_y = baseline + 12.0;
        let label = escape_html(&entry.label);
        let _ = writeln!(
            svg,
            r#"<rect class="bar" x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{color}"><title>{label}: {p}</title></rect><text class="category" x="{label_x:.2}" y="{label_y:.2}" transform="rotate(-45 {label_x:.2} {label_y:.2})" text-anchor="end">{label}</text>"#,
            y = baseline - height,
            color = PALETTE[i % PALETTE.len()],
            p = entry.probability,
        );
    }

    let _ = writeln!(
        svg,
        r#"<text class="axis-title" x="{x:.2}" y="{y:.2}" text-anchor="middle">emotions</text>"#,
        x = MARGIN_LEFT + plot_width / 2.0,
        y = CHART_HEIGHT - 4.0,
    );
    let _ = writeln!(
        svg,
        r#"<text class="axis-title" x="12" y="{y:.2}" transform="rotate(-90 12 {y:.2})" text-anchor="middle">probability</text>"#,
        y = MARGIN_TOP + plot_height / 2.0,
    );
    svg.push_str("</svg>");
    svg
}

/// Escape text for HTML element and attribute content
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use emotext_core::ClassProbability;

    fn analysis() -> Analysis {
        Analysis {
            text: "I am so happy today".to_string(),
            label: "happy".to_string(),
            glyph: "🤗".to_string(),
            confidence: 0.9,
            distribution: Distribution::new(vec![
                ClassProbability::new("happy", 0.9),
                ClassProbability::new("sad", 0.1),
            ]),
            latency_us: 12,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain 😂"), "plain 😂");
    }

    #[test]
    fn test_awaiting_page_has_form_only() {
        let html = render_page(&View::AwaitingSubmission);
        assert!(html.contains(r#"<textarea id="text" name="text""#));
        assert!(html.contains(r#"<button type="submit">Submit</button>"#));
        assert!(!html.contains("Prediction Probability"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_result_page_panels() {
        let html = render_page(&View::Result(analysis()));
        assert!(html.contains("happy:🤗"));
        assert!(html.contains("Confidence:0.9<"));
        assert!(html.contains("Prediction Probability"));
        assert_eq!(html.matches(r#"<rect class="bar""#).count(), 2);
        // submitted text is kept in the form
        assert!(html.contains(">I am so happy today</textarea>"));
    }

    #[test]
    fn test_error_page_has_single_banner() {
        let html = render_page(&View::Error {
            text: "   ".to_string(),
            message: "Please enter some text to analyze.".to_string(),
        });
        assert_eq!(html.matches("role=\"alert\"").count(), 1);
        assert!(html.contains("Please enter some text to analyze."));
        assert!(!html.contains("Prediction Probability"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut a = analysis();
        a.text = "<b>hi</b>".to_string();
        let html = render_page(&View::Result(a));
        assert!(!html.contains("<b>hi</b>"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn test_chart_bar_heights_follow_probability() {
        let svg = render_chart(&analysis().distribution);
        let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        assert!(svg.contains(&format!("height=\"{:.2}\"", 0.9 * plot_height)));
        assert!(svg.contains(&format!("height=\"{:.2}\"", 0.1 * plot_height)));
        assert!(svg.contains(">happy</text>"));
        assert!(svg.contains(">sad</text>"));
        assert!(svg.contains(PALETTE[0]) && svg.contains(PALETTE[1]));
    }
}
