//! Landing page route.
//!
//! Serves the single marketing page at `/`: navbar, hero, feature grid,
//! JWT comparison, quick-start snippets, contact form and footer. Code
//! snippets are highlighted on the server with the shared pattern table, so
//! the page needs no client-side highlighter. The small inline script only
//! handles copy buttons, the sign/verify tabs, and the contact form.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use chrono::Datelike;

use swt_site_core::contact::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS};
use swt_site_core::pattern::PatternTable;
use swt_site_core::render::{escape_html, render_code, render_html};

use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing_page))
}

async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_landing(&state, chrono::Utc::now().year()))
}

/// Render the whole landing page.
pub fn render_landing(state: &AppState, year: i32) -> String {
    let mut html = String::with_capacity(65536);
    html.push_str(
        &LANDING_HEAD
            .replace("{{SITE_URL}}", &escape_html(&state.site_url))
            .replace("{{JSON_LD}}", &json_ld()),
    );
    html.push_str("<body>\n");
    html.push_str(&NAVBAR.replace("{{GITHUB_URL}}", &escape_html(&state.github_url)));
    html.push_str(HERO);
    render_features(&mut html);
    render_comparison(&mut html);
    render_quick_start(&mut html, &state.patterns);
    html.push_str(CONTACT);
    html.push_str(
        &FOOTER
            .replace("{{GITHUB_URL}}", &escape_html(&state.github_url))
            .replace("{{YEAR}}", &year.to_string()),
    );
    html.push_str(r#"<div id="toast" class="toast" role="status" aria-live="polite"></div>"#);
    html.push_str("\n<script>\n");
    html.push_str(
        &PAGE_SCRIPT
            .replace("{{NAME_MIN}}", &NAME_MIN_CHARS.to_string())
            .replace("{{MESSAGE_MIN}}", &MESSAGE_MIN_CHARS.to_string()),
    );
    html.push_str("</script>\n</body></html>\n");
    html
}

/// Structured data block for search engines.
fn json_ld() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Secure Web Token (SWT)",
        "operatingSystem": "Any",
        "applicationCategory": "SecurityApplication",
        "description": "A secure alternative to JWT that provides AES-256-GCM encryption and device binding to prevent token theft.",
        "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
        "author": { "@type": "Organization", "name": "Secure Web Token" }
    })
    .to_string()
}

// ── Sections ─────────────────────────────────────────────────────────

fn render_features(html: &mut String) {
    html.push_str(
        r#"<section id="about" class="section">
<div class="section-head">
  <h2>Why <span class="accent">SWT</span> Over JWT?</h2>
  <p>Traditional JSON Web Tokens (JWT) are only Base64 encoded, making them easy to decode and vulnerable to theft. <strong>Secure Web Token (SWT)</strong> encrypts every payload with <strong>AES-256-GCM</strong> and strictly binds tokens to verified devices.</p>
</div>
<div class="features">
"#,
    );
    for (icon, title, description) in FEATURES {
        let _ = writeln!(
            html,
            r#"  <div class="feature"><div class="feature-icon">{icon}</div><h3>{title}</h3><p>{description}</p></div>"#
        );
    }
    html.push_str("</div>\n<div class=\"use-cases\"><h3>Perfect For</h3><div class=\"pills\">");
    for use_case in USE_CASES {
        let _ = write!(html, r#"<span class="pill">{use_case}</span>"#);
    }
    html.push_str("</div></div>\n</section>\n");
}

fn render_comparison(html: &mut String) {
    html.push_str(
        r#"<section class="section section-alt">
<div class="section-head">
  <h2>The Problem with <span class="danger">JWT</span></h2>
  <p>Traditional JWTs have fundamental limitations that SWT was designed to solve.</p>
</div>
<div class="compare">
  <div class="compare-card compare-bad"><h3>JWT Limitations</h3><ul>"#,
    );
    for problem in JWT_PROBLEMS {
        let _ = write!(html, r#"<li><span class="mark">&times;</span>{problem}</li>"#);
    }
    html.push_str(
        r#"</ul></div>
  <div class="compare-card compare-good"><h3>SWT Solutions</h3><ul>"#,
    );
    for solution in SWT_SOLUTIONS {
        let _ = write!(html, r#"<li><span class="mark">&#10003;</span>{solution}</li>"#);
    }
    html.push_str(
        r#"</ul></div>
</div>
<h3 class="workflow-title">How SWT Works</h3>
<div class="workflow">
"#,
    );
    for (step, (title, description)) in WORKFLOW.iter().enumerate() {
        let _ = writeln!(
            html,
            r#"  <div class="workflow-step"><div class="step-num">{}</div><h4>{title}</h4><p>{description}</p></div>"#,
            step.saturating_add(1)
        );
    }
    html.push_str("</div>\n</section>\n");
}

fn render_quick_start(html: &mut String, patterns: &PatternTable) {
    html.push_str(
        r#"<section id="docs" class="section">
<div class="section-head">
  <h2>Quick <span class="accent">Start</span></h2>
  <p>Get up and running with SWT in seconds</p>
</div>
<div class="steps">
"#,
    );

    step_heading(html, 1, "Install Package");
    html.push_str(&code_block(patterns, INSTALL_CODE, "terminal", "install"));

    step_heading(html, 2, "Import SWT");
    html.push_str(&code_block(patterns, IMPORT_CODE, "app.js", "import"));

    step_heading(html, 3, "Core Functions");
    html.push_str(
        r#"<div class="tabs" role="tablist"><button class="tab active" data-tab="sign" role="tab">sign()</button><button class="tab" data-tab="verify" role="tab">verify()</button></div>
<div class="tab-panel" data-panel="sign">"#,
    );
    html.push_str(&code_block(patterns, SIGN_CODE, "auth.ts", "sign"));
    html.push_str(r#"</div><div class="tab-panel" data-panel="verify" hidden>"#);
    html.push_str(&code_block(patterns, VERIFY_CODE, "middleware.ts", "verify"));
    html.push_str("</div>\n");

    step_heading(html, 4, "Payload Structure");
    html.push_str(&code_block(patterns, PAYLOAD_CODE, "payload.json", "payload"));
    html.push_str(
        r#"<p class="note">Note: The <code>fp</code> (fingerprint) and session ID are stored server-side only.</p>
</div>
<div class="badges"><span><i class="dot dot-green"></i>100% Type Safe</span><span><i class="dot dot-blue"></i>ESM + CommonJS</span><span><i class="dot dot-purple"></i>MIT Licensed</span></div>
</section>
"#,
    );
}

fn step_heading(html: &mut String, number: u8, title: &str) {
    let _ = writeln!(
        html,
        r#"<div class="step-head"><span class="step-badge step-{number}">{number}</span><h3>{title}</h3></div>"#
    );
}

/// A highlighted snippet in a terminal-style window with a copy button.
fn code_block(patterns: &PatternTable, code: &str, filename: &str, id: &str) -> String {
    let lines = render_code(code, patterns);
    let mut html = String::with_capacity(code.len().saturating_mul(8));
    let _ = write!(
        html,
        r#"<div class="code-block" id="code-{id}">
<div class="code-bar"><div class="code-dots"><i></i><i></i><i></i></div><span class="code-file">{filename}</span><button class="copy-btn" data-code="{}">Copy</button></div>
<pre class="code"><code>"#,
        escape_html(code)
    );
    html.push_str(&render_html(&lines));
    html.push_str("</code></pre>\n</div>\n");
    html
}

// ── Content ──────────────────────────────────────────────────────────

const ICON_LOCK: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="3" y="11" width="18" height="11" rx="2"/><path d="M7 11V7a5 5 0 0110 0v4"/></svg>"#;
const ICON_FINGERPRINT: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M12 11c0 3.5-1 6.5-3 9"/><path d="M8 4.8A7 7 0 0119 11c0 2.5-.3 5-1 7"/><path d="M5 8a7 7 0 00-.5 3c0 2 .3 3.6 1 5"/><path d="M12 7a4 4 0 014 4c0 3-.6 6-2 8.5"/><path d="M8 11a4 4 0 01.5-2"/></svg>"#;
const ICON_SERVER: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="3" y="3" width="18" height="7" rx="1"/><rect x="3" y="14" width="18" height="7" rx="1"/><path d="M7 6.5h.01M7 17.5h.01"/></svg>"#;
const ICON_BAN: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10"/><path d="M4.9 4.9l14.2 14.2"/></svg>"#;
const ICON_DATABASE: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14c0 1.7 4 3 9 3s9-1.3 9-3V5"/><path d="M3 12c0 1.7 4 3 9 3s9-1.3 9-3"/></svg>"#;
const ICON_SHIELD: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/></svg>"#;

/// Feature grid: (icon, title, description).
const FEATURES: [(&str, &str, &str); 6] = [
    (
        ICON_LOCK,
        "AES-256-GCM Encryption",
        "Payloads are fully encrypted, not just Base64 encoded like JWT. Nobody can decode your token without the secret.",
    ),
    (
        ICON_FINGERPRINT,
        "Device Fingerprint Binding",
        "Tokens are locked to specific devices or sessions, preventing unauthorized reuse from different machines.",
    ),
    (
        ICON_SERVER,
        "Server-Side Sessions",
        "Device IDs and sessions are managed securely on the backend and never exposed to the browser.",
    ),
    (
        ICON_BAN,
        "Prevent Token Theft",
        "Even if a token leaks, it cannot be reused from unauthorized devices. Complete protection against replay attacks.",
    ),
    (
        ICON_DATABASE,
        "Auto Device Registration",
        "Automatically generate and manage device IDs for seamless security without manual configuration.",
    ),
    (
        ICON_SHIELD,
        "Single-Device Enforcement",
        "Built-in support for restricting access to a single device without complex additional server logic.",
    ),
];

const USE_CASES: [&str; 4] = [
    "Course platforms with anti-piracy requirements",
    "SaaS dashboards with sensitive data",
    "Admin panels with restricted access",
    "Any system requiring device-bound authentication",
];

const JWT_PROBLEMS: [&str; 4] = [
    "JWT payloads are only Base64 encoded, not encrypted. Anyone can decode them.",
    "If a token leaks, it can be reused from any device.",
    "No built-in mechanism to restrict tokens to specific devices.",
    "Cannot safely enforce single-device login without additional server logic.",
];

const SWT_SOLUTIONS: [&str; 5] = [
    "Fully encrypts token payloads using AES-256-GCM.",
    "Binds tokens to device fingerprints managed on the backend.",
    "Prevents token reuse from unauthorized devices.",
    "Supports auto-generated device IDs for added security.",
    "Manages sessions server-side, so sensitive identifiers never reach the browser.",
];

/// Workflow diagram: (title, description), numbered in order.
const WORKFLOW: [(&str, &str); 4] = [
    ("User Login", "sign() generates token + server session"),
    ("Store Session", "Server stores deviceId + fingerprint internally"),
    ("Secure Cookie", "Browser receives token via HttpOnly cookie"),
    ("Verify Request", "verify() checks session + fingerprint"),
];

pub const INSTALL_CODE: &str = "npm install secure-web-token";

pub const IMPORT_CODE: &str = r#"// ESM
import { sign, verify, getStore } from "secure-web-token";

// CommonJS
const { sign, verify, getStore } = require("secure-web-token");"#;

pub const SIGN_CODE: &str = r#"import { sign } from "secure-web-token";

const secret = "my-super-secret";

// Auto device registration + server session
const { token, sessionId } = sign(
  { userId: 1, role: "admin" },
  secret,
  { fingerprint: true, store: "memory", expiresIn: 3600 }
);

console.log("TOKEN:", token);
console.log("SESSION ID (internal):", sessionId);"#;

pub const VERIFY_CODE: &str = r#"import { verify, getStore } from "secure-web-token";

// Get the store instance
const store = getStore("memory");

try {
  const payload = verify(token, secret, {
    sessionId,          // Server-side session ID
    fingerprint: "abc", // Device fingerprint
    store: "memory"     // Must match the store
  });

  console.log("USER DATA:", payload.data);
} catch (err) {
  console.error("AUTH ERROR:", err.message);
}"#;

pub const PAYLOAD_CODE: &str = r#"{
  "data": {
    "userId": 1,
    "role": "admin"
  },
  "iat": 1768368114,
  "exp": 1768369014,
  "fp": "device-fingerprint"
}"#;

// ── Markup ───────────────────────────────────────────────────────────

/// Document head: metadata, social cards, structured data and styles.
const LANDING_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>SWT - Secure Web Token | Next-Gen Alternative to JWT</title>
<meta name="description" content="Secure Web Token (SWT) offers AES-256-GCM encrypted, device-bound session tokens. A more secure, modern alternative to JWT for web authentication."/>
<meta name="keywords" content="SWT, Secure Web Token, JWT alternative, Authentication, Session Management, AES-256-GCM, Device Binding, Secure Authentication, Node.js Auth, Web Security"/>
<meta name="author" content="SWT Team"/>
<meta name="robots" content="index, follow, max-image-preview:large"/>
<meta name="format-detection" content="telephone=no, address=no, email=no"/>
<link rel="canonical" href="{{SITE_URL}}/"/>
<link rel="icon" href="/fav.png"/>
<link rel="apple-touch-icon" href="/fav.png"/>
<meta property="og:type" content="website"/>
<meta property="og:locale" content="en_US"/>
<meta property="og:site_name" content="Secure Web Token"/>
<meta property="og:url" content="{{SITE_URL}}"/>
<meta property="og:title" content="SWT - Secure Web Token | Beyond JWT"/>
<meta property="og:description" content="Device-bound, server-side session tokens with AES-256-GCM encryption. Prevent token theft and unauthorized reuse."/>
<meta property="og:image" content="{{SITE_URL}}/og-image.png"/>
<meta property="og:image:width" content="1200"/>
<meta property="og:image:height" content="630"/>
<meta property="og:image:alt" content="Secure Web Token - Better than JWT"/>
<meta name="twitter:card" content="summary_large_image"/>
<meta name="twitter:title" content="SWT - Secure Web Token | Beyond JWT"/>
<meta name="twitter:description" content="AES-256-GCM encrypted, device-bound session tokens. A modern alternative to JWT."/>
<meta name="twitter:image" content="{{SITE_URL}}/og-image.png"/>
<script type="application/ld+json">{{JSON_LD}}</script>
<link rel="preconnect" href="https://fonts.googleapis.com"/>
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin/>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&family=JetBrains+Mono:wght@400;500&display=swap" rel="stylesheet"/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#000;--bg-alt:#09090b;--card:rgba(24,24,27,.5);--border:#27272a;--text:#fff;--muted:#a1a1aa;--dim:#71717a;--blue:#3b82f6;--blue-d:#2563eb;--cyan:#22d3ee;--red:#f87171;--font:'Inter',-apple-system,sans-serif;--mono:'JetBrains Mono',ui-monospace,monospace}
html{scroll-behavior:smooth}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased;overflow-x:hidden}
a{color:inherit;text-decoration:none}
.nav{position:fixed;top:0;left:0;right:0;z-index:50;transition:all .3s;padding:20px 0}
.nav.scrolled{background:rgba(0,0,0,.8);backdrop-filter:blur(12px);border-bottom:1px solid rgba(59,130,246,.2);padding:12px 0}
.nav-inner{max-width:1200px;margin:0 auto;padding:0 24px;display:flex;align-items:center;justify-content:space-between}
.nav-logo{display:flex;align-items:center;gap:10px;font-weight:800;font-size:20px}
.nav-logo svg{width:32px;height:32px}
.nav-links{display:flex;align-items:center;gap:32px}
.nav-links a{font-size:14px;font-weight:500;color:var(--muted);transition:color .2s}
.nav-links a:hover{color:#60a5fa}
.nav-links .nav-gh{background:#18181b;border:1px solid var(--border);padding:8px 16px;border-radius:50px;color:#e4e4e7}
.nav-toggle{display:none;background:none;border:none;color:var(--muted);font-size:24px;cursor:pointer}
.hero{position:relative;min-height:100vh;display:flex;align-items:center;padding:120px 24px 80px;overflow:hidden}
.hero::before{content:'';position:absolute;top:-10%;left:-10%;width:40%;height:40%;background:rgba(37,99,235,.12);filter:blur(80px);border-radius:50%;animation:pulse 8s ease-in-out infinite}
.hero::after{content:'';position:absolute;bottom:-10%;right:-10%;width:40%;height:40%;background:rgba(59,130,246,.06);filter:blur(80px);border-radius:50%;animation:pulse 10s ease-in-out infinite 2s}
@keyframes pulse{0%,100%{transform:scale(1);opacity:.6}50%{transform:scale(1.25);opacity:1}}
@keyframes shimmer{0%{background-position:0% center}100%{background-position:200% center}}
.hero-inner{max-width:1200px;margin:0 auto;position:relative;z-index:1}
.hero-badge{display:inline-flex;align-items:center;gap:8px;padding:4px 12px;border-radius:50px;background:rgba(59,130,246,.1);border:1px solid rgba(59,130,246,.2);color:#60a5fa;font-size:12px;font-weight:600;text-transform:uppercase;letter-spacing:.05em;margin-bottom:24px}
.hero h1{font-size:72px;font-weight:800;line-height:1.1;letter-spacing:-2px;margin-bottom:24px}
.hero h1 .grad{background:linear-gradient(90deg,#60a5fa,#67e8f9,#60a5fa);background-size:200% auto;-webkit-background-clip:text;background-clip:text;-webkit-text-fill-color:transparent;animation:shimmer 5s linear infinite}
.hero p{font-size:20px;color:var(--muted);max-width:640px;margin-bottom:40px}
.hero-actions{display:flex;gap:16px;flex-wrap:wrap}
.btn{display:inline-flex;align-items:center;gap:8px;padding:16px 32px;border-radius:50px;font-weight:700;font-size:15px;border:none;cursor:pointer;transition:all .25s;font-family:var(--font)}
.btn-primary{background:var(--blue-d);color:#fff;box-shadow:0 0 20px rgba(37,99,235,.4)}.btn-primary:hover{background:var(--blue);box-shadow:0 0 35px rgba(37,99,235,.6);transform:translateY(-2px)}
.btn-outline{background:#18181b;border:1px solid var(--border);color:#fff}.btn-outline:hover{border-color:var(--blue);transform:translateY(-2px)}
.btn:disabled{opacity:.6;cursor:not-allowed;transform:none}
.install{margin-top:32px;display:inline-flex;align-items:center;gap:12px;padding:8px 12px;background:var(--card);border:1px solid var(--border);border-radius:8px;font-family:var(--mono);font-size:14px;color:var(--muted)}
.install .prompt{color:var(--dim)}.install .pkg{color:#60a5fa}
.install button{background:none;border:none;color:var(--dim);cursor:pointer;font-size:12px;font-family:var(--font)}
.section{padding:96px 24px;max-width:1200px;margin:0 auto}
.section-alt{max-width:none;background:var(--bg-alt)}
.section-alt>*{max-width:1000px;margin-left:auto;margin-right:auto}
.section-head{text-align:center;margin-bottom:64px}
.section-head h2{font-size:48px;font-weight:800;margin-bottom:16px;letter-spacing:-1px}
.section-head p{color:var(--muted);max-width:672px;margin:0 auto}
.accent{color:var(--blue)}.danger{color:var(--red)}
.features{display:grid;grid-template-columns:repeat(3,1fr);gap:32px;margin-bottom:80px}
.feature{padding:32px;border-radius:16px;background:var(--card);border:1px solid var(--border);transition:all .25s}
.feature:hover{transform:translateY(-5px);border-color:rgba(59,130,246,.5)}
.feature-icon{width:48px;height:48px;border-radius:12px;background:rgba(59,130,246,.1);display:flex;align-items:center;justify-content:center;margin-bottom:24px;color:#60a5fa;transition:all .2s}
.feature:hover .feature-icon{background:var(--blue-d);color:#fff}
.feature-icon svg{width:24px;height:24px}
.feature h3{font-size:20px;margin-bottom:12px}.feature p{color:var(--muted)}
.use-cases{text-align:center;max-width:768px;margin:0 auto}.use-cases h3{font-size:24px;margin-bottom:24px}
.pills{display:flex;flex-wrap:wrap;justify-content:center;gap:12px}
.pill{padding:8px 16px;background:#18181b;border:1px solid var(--border);border-radius:50px;font-size:14px;color:#d4d4d8}
.compare{display:grid;grid-template-columns:1fr 1fr;gap:32px}
.compare-card{padding:32px;border-radius:16px}
.compare-card h3{font-size:20px;margin-bottom:24px}
.compare-card ul{list-style:none;display:flex;flex-direction:column;gap:16px}
.compare-card li{display:flex;gap:12px;color:var(--muted)}
.compare-bad{background:rgba(239,68,68,.05);border:1px solid rgba(239,68,68,.2)}.compare-bad h3,.compare-bad .mark{color:var(--red)}
.compare-good{background:rgba(59,130,246,.05);border:1px solid rgba(59,130,246,.2)}.compare-good h3,.compare-good .mark{color:#60a5fa}
.workflow-title{text-align:center;font-size:24px;margin:80px auto 32px}
.workflow{display:grid;grid-template-columns:repeat(4,1fr);gap:16px}
.workflow-step{padding:24px;border-radius:12px;background:var(--card);border:1px solid var(--border);text-align:center}
.step-num{width:32px;height:32px;border-radius:50%;background:var(--blue-d);display:flex;align-items:center;justify-content:center;margin:0 auto 16px;font-size:14px;font-weight:700}
.workflow-step h4{margin-bottom:8px}.workflow-step p{font-size:12px;color:var(--dim)}
.steps{max-width:900px;margin:0 auto;display:flex;flex-direction:column;gap:16px}
.step-head{display:flex;align-items:center;gap:12px;margin-top:24px}
.step-head h3{font-size:18px;font-weight:600}
.step-badge{width:32px;height:32px;border-radius:8px;display:flex;align-items:center;justify-content:center;font-size:14px;font-weight:700}
.step-1{background:linear-gradient(135deg,#3b82f6,#2563eb)}.step-2{background:linear-gradient(135deg,#a855f7,#9333ea)}.step-3{background:linear-gradient(135deg,#10b981,#059669)}.step-4{background:linear-gradient(135deg,#f97316,#ea580c)}
.tabs{display:flex;gap:8px}
.tab{padding:10px 20px;border-radius:12px;border:none;background:#18181b;color:var(--muted);font-weight:500;font-size:14px;cursor:pointer;font-family:var(--mono);transition:all .3s}
.tab.active{background:var(--blue-d);color:#fff;box-shadow:0 8px 20px rgba(37,99,235,.25)}
.code-block{border-radius:16px;overflow:hidden;border:1px solid var(--border);background:linear-gradient(#18181bcc,#0a0a0a)}
.code-block:hover{border-color:#3f3f46}
.code-bar{display:flex;align-items:center;gap:16px;padding:12px 20px;background:rgba(24,24,27,.6);border-bottom:1px solid rgba(39,39,42,.8)}
.code-dots{display:flex;gap:6px}.code-dots i{width:12px;height:12px;border-radius:50%;background:#ff5f56}.code-dots i:nth-child(2){background:#ffbd2e}.code-dots i:nth-child(3){background:#27c93f}
.code-file{font-family:var(--mono);font-size:12px;color:var(--dim);flex:1}
.copy-btn{background:none;border:none;color:var(--dim);font-size:12px;padding:6px 12px;border-radius:8px;cursor:pointer;font-family:var(--font)}
.copy-btn:hover{background:#27272a;color:#fff}.copy-btn.copied{color:#34d399}
.code{padding:20px;overflow-x:auto;font-family:var(--mono);font-size:14px;line-height:1.7}
.code code{display:table;width:100%}
.code-row{display:table-row}
.code-ln{display:table-cell;width:32px;padding-right:16px;text-align:right;color:#52525b;user-select:none}
.code-row:hover .code-ln{color:var(--dim)}
.code-text{display:table-cell;white-space:pre}
.tok-plain{color:#d4d4d8}.tok-comment{color:var(--dim);font-style:italic}.tok-string{color:#34d399}.tok-keyword{color:#c084fc}.tok-literal,.tok-number{color:#fb923c}.tok-function{color:var(--cyan)}.tok-namespace{color:#60a5fa}.tok-key{color:#7dd3fc}
.note{font-size:14px;color:var(--dim);padding-left:4px}.note code{color:var(--cyan);font-family:var(--mono)}
.badges{margin-top:64px;display:flex;flex-wrap:wrap;justify-content:center;gap:24px;font-family:var(--mono);font-size:14px;color:var(--dim)}
.badges span{display:flex;align-items:center;gap:8px}
.dot{width:8px;height:8px;border-radius:50%;display:inline-block}.dot-green{background:#10b981}.dot-blue{background:var(--blue)}.dot-purple{background:#a855f7}
.contact{max-width:1024px;margin:0 auto;display:flex;border:1px solid var(--border);border-radius:24px;overflow:hidden;background:rgba(24,24,27,.3)}
.contact-info,.contact-form{flex:1;padding:48px}
.contact-info{border-right:1px solid var(--border)}
.contact-info h2{font-size:30px;margin-bottom:24px}.contact-info>p{color:var(--muted);margin-bottom:32px}
.contact-item{display:flex;align-items:center;gap:16px;margin-bottom:24px}
.contact-item .feature-icon{margin:0}
.contact-item small{display:block;font-size:12px;color:var(--dim);text-transform:uppercase;letter-spacing:.1em;font-weight:700}
.form-row{display:grid;grid-template-columns:1fr 1fr;gap:16px}
.field{display:flex;flex-direction:column;gap:8px;margin-bottom:16px}
.field label{font-size:14px;color:var(--muted)}
.field input,.field textarea{width:100%;background:#000;border:1px solid var(--border);border-radius:12px;padding:12px;color:#fff;font-family:var(--font);font-size:15px;resize:none}
.field input:focus,.field textarea:focus{outline:none;border-color:var(--blue)}
.field.invalid input,.field.invalid textarea{border-color:var(--red)}
.field-error{font-size:12px;color:var(--red);min-height:1em}
.contact-form .btn{width:100%;justify-content:center;border-radius:12px}
.footer{border-top:1px solid var(--border);padding:48px 24px}
.footer-grid{max-width:1200px;margin:0 auto 48px;display:grid;grid-template-columns:repeat(4,1fr);gap:48px}
.footer-grid h4{margin-bottom:24px}.footer-grid ul{list-style:none;display:flex;flex-direction:column;gap:16px;font-size:14px;color:var(--dim)}
.footer-grid a:hover{color:#60a5fa}
.footer-about p{font-size:14px;color:var(--dim);margin-top:24px}
.footer-bottom{max-width:1200px;margin:0 auto;padding-top:32px;border-top:1px solid #18181b;display:flex;justify-content:space-between;font-size:12px;color:#52525b}
.footer-bottom nav{display:flex;gap:24px}.footer-bottom a:hover{color:#fff}
.toast{position:fixed;top:24px;right:24px;z-index:100;padding:14px 20px;border-radius:12px;font-size:14px;font-weight:500;background:#18181b;border:1px solid var(--border);opacity:0;transform:translateY(-12px);transition:all .3s;pointer-events:none}
.toast.show{opacity:1;transform:none}.toast.ok{border-color:#10b981;color:#34d399}.toast.err{border-color:var(--red);color:var(--red)}
@media(max-width:900px){.hero h1{font-size:44px}.features,.compare,.workflow,.footer-grid{grid-template-columns:1fr}.nav-links{display:none}.nav-links.open{display:flex;flex-direction:column;position:absolute;top:100%;left:0;right:0;background:#000;padding:24px;gap:16px;border-bottom:1px solid rgba(59,130,246,.2)}.nav-toggle{display:block}.contact{flex-direction:column}.contact-info{border-right:none;border-bottom:1px solid var(--border)}.form-row{grid-template-columns:1fr}.section-head h2{font-size:32px}}
</style></head>
"##;

const NAVBAR: &str = r##"<nav class="nav" id="nav">
<div class="nav-inner">
  <a href="/" class="nav-logo" aria-label="SWT Secure Web Token">
    <svg viewBox="0 0 32 32" fill="none"><defs><linearGradient id="sg" x1="0" y1="0" x2="32" y2="32"><stop offset="0%" stop-color="#3b82f6"/><stop offset="100%" stop-color="#22d3ee"/></linearGradient></defs><rect width="32" height="32" rx="8" fill="url(#sg)"/><path d="M16 7l7 3v5c0 4.5-3 8-7 10-4-2-7-5.5-7-10v-5z" stroke="#000" stroke-width="2" stroke-linejoin="round"/></svg>
    SWT
  </a>
  <button class="nav-toggle" id="nav-toggle" aria-label="Toggle menu">&#9776;</button>
  <div class="nav-links" id="nav-links">
    <a href="#home">Home</a>
    <a href="#about">About</a>
    <a href="#docs">Documentation</a>
    <a href="#contact">Contact</a>
    <a href="{{GITHUB_URL}}" class="nav-gh" target="_blank" rel="noopener noreferrer">GitHub</a>
  </div>
</div>
</nav>
"##;

const HERO: &str = r##"<section class="hero" id="home">
<div class="hero-inner">
  <span class="hero-badge">&#128274; AES-256-GCM Encrypted</span>
  <h1>Beyond JWT.<br/><span class="grad">Secure Web Token</span></h1>
  <p>Device-bound, server-side session tokens with AES-256-GCM encryption. Unlike JWT, SWT payloads are fully encrypted, not just Base64 encoded. Prevent token theft and unauthorized reuse.</p>
  <div class="hero-actions">
    <a href="#docs" class="btn btn-primary">Get Started &rsaquo;</a>
    <a href="#docs" class="btn btn-outline">View Documentation</a>
  </div>
  <div class="install"><code><span class="prompt">$</span> npm install <span class="pkg">secure-web-token</span></code><button class="copy-btn" data-code="npm install secure-web-token">Copy</button></div>
</div>
</section>
"##;

const CONTACT: &str = r##"<section id="contact" class="section">
<div class="contact">
  <div class="contact-info">
    <h2>Let&apos;s Secure Your App</h2>
    <p>Have questions about implementing SWT? Our security experts are ready to help you migrate from legacy token systems.</p>
    <div class="contact-item"><div class="feature-icon">&#9993;</div><div><small>Email Us</small>security@swt.dev</div></div>
    <div class="contact-item"><div class="feature-icon">&#128172;</div><div><small>Live Chat</small>Available 24/7 for Enterprise</div></div>
  </div>
  <div class="contact-form">
    <form id="contact-form" novalidate>
      <div class="form-row">
        <div class="field" data-field="name"><label for="cf-name">Name</label><input id="cf-name" name="name" type="text" placeholder="John Doe" autocomplete="name"/><span class="field-error"></span></div>
        <div class="field" data-field="email"><label for="cf-email">Email</label><input id="cf-email" name="email" type="email" placeholder="john@example.com" autocomplete="email"/><span class="field-error"></span></div>
      </div>
      <div class="field" data-field="message"><label for="cf-message">Message</label><textarea id="cf-message" name="message" rows="4" placeholder="Tell us about your project..."></textarea><span class="field-error"></span></div>
      <button type="submit" class="btn btn-primary" id="cf-submit">Send Message</button>
    </form>
  </div>
</div>
</section>
"##;

const FOOTER: &str = r##"<footer class="footer">
<div class="footer-grid">
  <div class="footer-about"><a href="/" class="nav-logo">SWT</a><p>Securing the next generation of web applications with device-bound tokens.</p></div>
  <div><h4>Product</h4><ul><li><a href="#home">Home</a></li><li><a href="#about">About</a></li><li><a href="#docs">Documentation</a></li><li><a href="#contact">Contact</a></li></ul></div>
  <div><h4>Resources</h4><ul><li><a href="#docs">API Reference</a></li><li><a href="{{GITHUB_URL}}">Community</a></li><li><a href="/health">Status</a></li><li><a href="#contact">Security</a></li></ul></div>
  <div><h4>Company</h4><ul><li><a href="#about">About Us</a></li><li><a href="{{GITHUB_URL}}">Blog</a></li><li><a href="#contact">Contact</a></li><li><a href="#contact">Privacy Policy</a></li></ul></div>
</div>
<div class="footer-bottom">
  <span>&copy; {{YEAR}} Secure Web Token. All rights reserved.</span>
  <nav><a href="{{GITHUB_URL}}" target="_blank" rel="noopener noreferrer">GitHub</a><a href="mailto:security@swt.dev">Email</a></nav>
</div>
</footer>
"##;

/// Client behaviour: navbar, copy buttons, tabs, and the contact form.
///
/// The form runs `idle -> submitting -> success | failed -> idle`; the
/// submit button stays disabled while a request is in flight.
const PAGE_SCRIPT: &str = r##"(function () {
  var nav = document.getElementById('nav');
  window.addEventListener('scroll', function () { nav.classList.toggle('scrolled', window.scrollY > 20); });
  var links = document.getElementById('nav-links');
  document.getElementById('nav-toggle').addEventListener('click', function () { links.classList.toggle('open'); });
  links.querySelectorAll('a').forEach(function (a) { a.addEventListener('click', function () { links.classList.remove('open'); }); });

  document.querySelectorAll('.copy-btn').forEach(function (btn) {
    btn.addEventListener('click', function () {
      navigator.clipboard.writeText(btn.dataset.code).then(function () {
        btn.textContent = 'Copied!'; btn.classList.add('copied');
        setTimeout(function () { btn.textContent = 'Copy'; btn.classList.remove('copied'); }, 2000);
      });
    });
  });

  document.querySelectorAll('.tab').forEach(function (tab) {
    tab.addEventListener('click', function () {
      document.querySelectorAll('.tab').forEach(function (t) { t.classList.toggle('active', t === tab); });
      document.querySelectorAll('.tab-panel').forEach(function (p) { p.hidden = p.dataset.panel !== tab.dataset.tab; });
    });
  });

  var toastEl = document.getElementById('toast'), toastTimer;
  function toast(text, ok) {
    toastEl.textContent = text;
    toastEl.className = 'toast show ' + (ok ? 'ok' : 'err');
    clearTimeout(toastTimer);
    toastTimer = setTimeout(function () { toastEl.className = 'toast'; }, 4000);
  }

  var form = document.getElementById('contact-form');
  var submit = document.getElementById('cf-submit');
  var state = 'idle';
  function setState(next) {
    state = next;
    submit.disabled = state === 'submitting';
    submit.textContent = state === 'submitting' ? 'Sending...' : 'Send Message';
  }
  function fieldError(name, text) {
    var field = form.querySelector('[data-field="' + name + '"]');
    field.classList.toggle('invalid', !!text);
    field.querySelector('.field-error').textContent = text || '';
  }
  function validate(v) {
    if (Array.from(v.name).length < {{NAME_MIN}}) return ['name', 'Name must be at least {{NAME_MIN}} characters'];
    if (!/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(v.email)) return ['email', 'Invalid email address'];
    if (Array.from(v.message).length < {{MESSAGE_MIN}}) return ['message', 'Message must be at least {{MESSAGE_MIN}} characters'];
    return null;
  }
  form.addEventListener('input', function (e) {
    if (e.target.name) fieldError(e.target.name, '');
    if (state !== 'submitting') setState('idle');
  });
  form.addEventListener('submit', function (e) {
    e.preventDefault();
    if (state === 'submitting') return;
    var values = { name: form.name.value, email: form.email.value, message: form.message.value };
    ['name', 'email', 'message'].forEach(function (n) { fieldError(n, ''); });
    var invalid = validate(values);
    if (invalid) { fieldError(invalid[0], invalid[1]); toast(invalid[1], false); return; }
    setState('submitting');
    fetch('/api/contact', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(values) })
      .then(function (r) { return r.json(); })
      .then(function (res) {
        if (res.success) { setState('success'); toast(res.message, true); form.reset(); }
        else { setState('failed'); if (res.field) fieldError(res.field, res.error); toast(res.error, false); }
      })
      .catch(function () { setState('failed'); toast('Something went wrong. Please try again.', false); })
      .then(function () { if (state !== 'submitting') setState('idle'); });
  });
})();
"##;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use swt_site_core::mailer::ContactService;

    use super::*;
    use crate::config::SiteConfig;

    fn state() -> AppState {
        let config = SiteConfig::from_lookup(|key| match key {
            "SWT_SITE_URL" => Some("https://swt.example".to_owned()),
            "SWT_GITHUB_URL" => Some("https://github.com/swt/swt".to_owned()),
            _ => None,
        });
        AppState::new(ContactService::new(None), &config).unwrap()
    }

    #[test]
    fn page_has_every_section() {
        let html = render_landing(&state(), 2026);
        for anchor in [
            r#"id="home""#,
            r#"id="about""#,
            r#"id="docs""#,
            r#"id="contact""#,
            r#"id="contact-form""#,
        ] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
        assert!(html.contains("&copy; 2026 Secure Web Token"));
        assert!(!html.contains("{{"), "unfilled placeholder");
    }

    #[test]
    fn page_uses_configured_urls() {
        let html = render_landing(&state(), 2026);
        assert!(html.contains(r#"<link rel="canonical" href="https://swt.example/"/>"#));
        assert!(html.contains(r#"href="https://github.com/swt/swt""#));
    }

    #[test]
    fn snippets_are_highlighted_on_the_server() {
        let html = render_landing(&state(), 2026);
        assert!(html.contains(r#"<span class="tok-function">sign</span>"#));
        assert!(html.contains(r#"<span class="tok-namespace">console</span>"#));
        assert!(html.contains(r#"<span class="tok-comment">// Get the store instance</span>"#));
        assert!(html.contains(r#"<span class="tok-string">&quot;secure-web-token&quot;</span>"#));
        // Every quick-start block gets a gutter starting at 1.
        assert_eq!(
            html.matches(r#"<span class="code-ln">1</span>"#).count(),
            5
        );
    }

    #[test]
    fn copy_buttons_carry_escaped_source() {
        let block = code_block(&PatternTable::javascript().unwrap(), IMPORT_CODE, "app.js", "import");
        assert!(block.contains(r#"data-code="// ESM"#));
        assert!(block.contains("&quot;secure-web-token&quot;);\">Copy</button>"));
    }

    #[test]
    fn json_ld_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&json_ld()).unwrap();
        assert_eq!(value["@type"], "SoftwareApplication");
    }

    #[test]
    fn script_limits_match_server_rules() {
        let html = render_landing(&state(), 2026);
        assert!(html.contains("Name must be at least 2 characters"));
        assert!(html.contains("Message must be at least 10 characters"));
    }
}
