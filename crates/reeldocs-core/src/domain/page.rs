//! Static HTML page templates.
//!
//! Both pages are plain string substitution over literal markup. The pages
//! themselves are thin shells: the shared `scripts.js` fills in the version
//! selector and landing list at runtime from `versions.json`, and the version
//! page hands its `openapi.json` to the Scalar API reference renderer.
//!
//! Substituted values are inserted verbatim. Titles and versions come from
//! the maintainers of the docs site, not from visitors.

use std::collections::HashMap;

use crate::domain::doc_config::DocConfig;

/// Function signatures the shared `scripts.js` must define for the generated
/// pages to work.
pub const REQUIRED_HOOKS: [&str; 3] = [
    "function loadVersions",
    "function setupLandingPage",
    "function switchVersion",
];

/// Variables available to a page template.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard variables shared by every page.
    pub fn for_site(cfg: &DocConfig) -> Self {
        Self::new()
            .with_variable("TITLE", &cfg.title)
            .with_variable("SUBTITLE", &cfg.subtitle)
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in a single left-to-right pass.
    ///
    /// Values are never rescanned, so a version string that happens to
    /// contain `{{TITLE}}` is emitted literally. Unknown placeholders are
    /// left as they are.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after[..end];
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Per-version API reference page, written to `<docs>/<version>/index.html`.
pub fn render_version_page(version: &str, cfg: &DocConfig) -> String {
    RenderContext::for_site(cfg)
        .with_variable("VERSION", version)
        .render(VERSION_PAGE_TEMPLATE)
}

/// Landing page, written to `<docs>/index.html`.
pub fn render_landing_page(cfg: &DocConfig) -> String {
    RenderContext::for_site(cfg).render(LANDING_PAGE_TEMPLATE)
}

/// Required hooks not defined in the given `scripts.js` source.
///
/// Detection is textual: a hook counts as present when its signature
/// appears anywhere in the file.
pub fn missing_script_hooks(scripts: &str) -> Vec<&'static str> {
    REQUIRED_HOOKS
        .into_iter()
        .filter(|hook| !scripts.contains(*hook))
        .collect()
}

const VERSION_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}} - {{VERSION}}</title>
    <link rel="stylesheet" href="../styles.css">
    <link rel="icon" type="image/x-icon" href="../favicon.ico">
</head>
<body class="has-header">
    <div class="reach-header">
        <div class="reach-header-left">
            <img
                src="../icon.png"
                alt="Reach Systems"
                class="reach-header-logo"
                onerror="this.style.display='none'"
            >
            <div class="reach-header-title">{{TITLE}} Documentation</div>
        </div>
        <select
            class="reach-version-select"
            id="version-select"
            aria-label="Select API version"
            onchange="switchVersion(this.value, '{{VERSION}}')"
        >
            <option selected>{{VERSION}}</option>
        </select>
    </div>

    <div id="app"></div>

    <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
    <script src="../scripts.js"></script>
    <script>
        loadVersions('{{VERSION}}');

        fetch('./openapi.json')
            .then(function (r) {
                if (!r.ok) throw new Error('Failed to load openapi.json: ' + r.status);
                return r.json();
            })
            .then(function (spec) {
                Scalar.createApiReference('#app', {
                    content: spec,
                    agent: {
                        disabled: true
                    }
                });
            })
            .catch(function (err) {
                document.getElementById('app').innerHTML =
                    '<div style="padding:40px;text-align:center;color:#666;">' +
                    '<h2>Failed to load API specification</h2>' +
                    '<p>' + err.message + '</p></div>';
            });
    </script>
</body>
</html>
"#;

const LANDING_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}} Documentation</title>
    <link rel="stylesheet" href="styles.css">
    <link rel="icon" type="image/x-icon" href="./favicon.ico">
</head>
<body class="has-header landing-page">
    <div class="reach-header">
        <div class="reach-header-left">
            <img
                src="icon.png"
                alt="Reach Systems"
                class="reach-header-logo"
                onerror="this.style.display='none'"
            >
            <div class="reach-header-title">{{TITLE}} Documentation</div>
        </div>
    </div>

    <div class="landing-container">
        <h1>{{TITLE}} Documentation</h1>
        <p class="subtitle">{{SUBTITLE}}</p>

        <div class="auto-redirect" id="redirect-banner">
            Loading latest version...
        </div>

        <h2>Available Versions</h2>
        <ul class="version-list" id="version-list">
            <li class="loading">Loading versions...</li>
        </ul>
    </div>

    <script src="scripts.js"></script>
    <script>
        setupLandingPage();
    </script>
</body>
</html>
"#;
