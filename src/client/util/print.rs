use dioxus::prelude::*;
use dioxus_logger::tracing;

/// Opens `html` in a new window and prints it.
pub fn print_html(html: &str) {
    let payload = match serde_json::to_string(html) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to encode printable document: {}", e);
            return;
        }
    };

    let script = format!(
        r#"
        const w = window.open("", "_blank");
        if (w) {{
            w.document.open();
            w.document.write({payload});
            w.document.close();
            w.focus();
            setTimeout(() => {{ w.print(); w.close(); }}, 250);
        }}
        "#
    );
    document::eval(&script);
}
