//! CSS for the rendered homepage.
//!
//! The whole stylesheet is inlined into the document head so the page
//! renders without any asset server.
//!
//! # Customization
//!
//! ```rust
//! use homepage_leptos::styles::HOMEPAGE_CSS;
//!
//! let brand = ":root { --brand: #0b5cff; }";
//! let combined = format!("{}\n{}", HOMEPAGE_CSS, brand);
//! assert!(combined.ends_with("}"));
//! ```

/// Complete stylesheet: layout, sections, carousel, tabs and modals.
pub const HOMEPAGE_CSS: &str = r#"
:root {
    --brand: #c8102e;
    --brand-dark: #9b0c23;
    --ink: #1c1c1e;
    --ink-soft: #5b5b63;
    --surface: #ffffff;
    --surface-alt: #f6f4f1;
    --line: #e6e2dc;
    --radius: 14px;
    --shadow: 0 10px 30px rgba(20, 20, 30, 0.08);
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }

html, body {
    margin: 0;
    padding: 0;
    font-family: var(--font);
    color: var(--ink);
    background: var(--surface);
    line-height: 1.5;
}

img { max-width: 100%; display: block; }
a { color: inherit; }

.container {
    width: min(1200px, 100% - 32px);
    margin: 0 auto;
}
.container.narrow { width: min(860px, 100% - 32px); }

.section { padding: 72px 0; }
.section:nth-of-type(even) { background: var(--surface-alt); }

.section-header { margin-bottom: 28px; }
.section-eyebrow {
    margin: 0 0 6px;
    font-size: 13px;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: var(--brand);
}
.section-title { margin: 0; font-size: clamp(24px, 3vw, 36px); }

.empty-state {
    padding: 24px;
    border: 1px dashed var(--line);
    border-radius: var(--radius);
    color: var(--ink-soft);
    text-align: center;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 22px;
    border-radius: 999px;
    border: 1px solid transparent;
    font: inherit;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}
.btn-primary { background: var(--brand); color: #fff; }
.btn-primary:hover { background: var(--brand-dark); }
.btn-secondary { background: rgba(255, 255, 255, 0.14); color: #fff; border-color: rgba(255, 255, 255, 0.4); }
.btn-outline { background: transparent; color: var(--brand); border-color: var(--brand); }
.btn-outline:hover { background: var(--brand); color: #fff; }

/* Hero */
.hero {
    position: relative;
    min-height: 560px;
    display: flex;
    align-items: center;
    background: #222 center / cover no-repeat;
    color: #fff;
}
.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(100deg, rgba(0, 0, 0, 0.72), rgba(0, 0, 0, 0.2));
}
.hero-content { position: relative; max-width: 720px; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 13px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}
.hero-badge-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--brand); }
.hero-title { font-size: clamp(34px, 5vw, 58px); line-height: 1.1; margin: 12px 0; }
.hero-description { font-size: 18px; opacity: 0.9; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 24px; }

/* Tabs */
.tab-bar {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-bottom: 24px;
}
.tab-btn {
    padding: 8px 18px;
    border-radius: 999px;
    border: 1px solid var(--line);
    background: var(--surface);
    font: inherit;
    cursor: pointer;
}
.tab-btn.active { background: var(--ink); border-color: var(--ink); color: #fff; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }

/* Carousel */
.carousel { position: relative; }
.carousel-viewport { overflow: hidden; }
.carousel-track {
    display: flex;
    transition: transform 0.5s ease;
    transform: translateX(calc(var(--carousel-index, 0) * -100%));
}
.carousel-slide { flex: 0 0 100%; padding: 0 8px; }
@media (min-width: 720px) {
    .carousel-slide { flex-basis: 50%; }
    .carousel-track { transform: translateX(calc(var(--carousel-index, 0) * -50%)); }
}
@media (min-width: 1080px) {
    .carousel-slide { flex-basis: 33.333%; }
    .carousel-track { transform: translateX(calc(var(--carousel-index, 0) * -33.333%)); }
}
.carousel-nav {
    position: absolute;
    top: 50%;
    z-index: 2;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    border: 1px solid var(--line);
    background: var(--surface);
    box-shadow: var(--shadow);
    cursor: pointer;
    transform: translateY(-50%);
}
.carousel-nav.prev { left: -12px; }
.carousel-nav.next { right: -12px; }

/* Banks */
.bank-slide { display: flex; align-items: center; justify-content: center; min-height: 96px; }
.bank-logo { max-height: 56px; filter: grayscale(1); opacity: 0.8; }
.bank-logo:hover { filter: none; opacity: 1; }

/* Neighborhoods */
.neighborhood-links {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 10px 24px;
    list-style: none;
    margin: 0;
    padding: 0;
}
.neighborhood-link { color: var(--ink-soft); text-decoration: none; }
.neighborhood-link:hover { color: var(--brand); }
.view-all { display: inline-block; margin-top: 18px; color: var(--brand); font-weight: 600; }

/* Projects */
.project-card {
    background: var(--surface);
    border: 1px solid var(--line);
    border-radius: var(--radius);
    overflow: hidden;
    box-shadow: var(--shadow);
}
.project-media { position: relative; aspect-ratio: 4 / 3; overflow: hidden; }
.project-image { width: 100%; height: 100%; object-fit: cover; }
.project-type {
    position: absolute;
    top: 12px;
    left: 12px;
    padding: 4px 10px;
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.65);
    color: #fff;
    font-size: 12px;
}
.project-body { padding: 16px; display: grid; gap: 8px; }
.project-name { margin: 0; font-size: 18px; }
.project-location, .tour-location { display: flex; align-items: center; gap: 6px; margin: 0; color: var(--ink-soft); }
.project-meta { display: flex; justify-content: space-between; align-items: center; }
.project-beds { display: inline-flex; align-items: center; gap: 6px; }
.project-price { font-weight: 700; color: var(--brand); }

/* Zones */
.zone-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 16px;
}
.zone-card {
    position: relative;
    display: grid;
    padding: 0;
    border: 0;
    border-radius: var(--radius);
    overflow: hidden;
    background: #111;
    color: #fff;
    text-align: left;
    cursor: pointer;
}
.zone-card .zone-image { width: 100%; aspect-ratio: 1; object-fit: cover; opacity: 0.75; }
.zone-card .zone-name { position: absolute; left: 14px; bottom: 34px; font-weight: 700; font-size: 18px; }
.zone-card .zone-projects { position: absolute; left: 14px; bottom: 12px; font-size: 13px; }

/* Modals */
.zone-modal, .enquiry-modal {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: none;
    align-items: center;
    justify-content: center;
    padding: 16px;
    background: rgba(10, 10, 14, 0.6);
}
.zone-modal.open, .enquiry-modal.open { display: flex; }
.zone-dialog, .enquiry-dialog {
    position: relative;
    width: min(960px, 100%);
    max-height: 90vh;
    overflow: auto;
    border-radius: var(--radius);
    background: var(--surface);
    padding: 28px;
}
.enquiry-dialog { width: min(480px, 100%); }
.modal-close {
    position: absolute;
    top: 12px;
    right: 12px;
    border: 0;
    background: transparent;
    cursor: pointer;
}
.zone-panel { display: none; grid-template-columns: 2fr 1fr; gap: 24px; }
.zone-panel.active { display: grid; }
.zone-detail-image { border-radius: var(--radius); aspect-ratio: 16 / 9; object-fit: cover; width: 100%; }
.zone-detail-name { display: flex; align-items: center; gap: 8px; }
.zone-sidebar ul { list-style: none; margin: 0; padding: 0; display: grid; gap: 8px; }
.zone-sidebar-item {
    width: 100%;
    display: flex;
    justify-content: space-between;
    padding: 10px 12px;
    border: 1px solid var(--line);
    border-radius: 10px;
    background: var(--surface);
    font: inherit;
    cursor: pointer;
}
.zone-sidebar-item:hover { border-color: var(--brand); }

/* Virtual tours */
.tour-card { display: block; text-decoration: none; }
.tour-media { position: relative; border-radius: var(--radius); overflow: hidden; aspect-ratio: 16 / 10; }
.tour-media img { width: 100%; height: 100%; object-fit: cover; }
.tour-play {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    background: rgba(0, 0, 0, 0.25);
}
.tour-title { margin: 12px 0 4px; font-size: 17px; }

/* Why choose us */
.why-layout { display: grid; grid-template-columns: 3fr 2fr; gap: 40px; align-items: center; }
.features-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin-top: 24px; }
.feature-card { padding: 20px; border-radius: var(--radius); background: var(--surface); border: 1px solid var(--line); }
.feature-icon { color: var(--brand); }
.feature-title { margin: 10px 0 6px; font-size: 17px; }
.feature-description { margin: 0; color: var(--ink-soft); }
.why-art { position: relative; }
.why-handshake { position: absolute; right: -12px; bottom: -12px; width: 45%; border-radius: var(--radius); box-shadow: var(--shadow); }
@media (max-width: 860px) {
    .why-layout, .zone-panel.active { grid-template-columns: 1fr; }
    .features-grid { grid-template-columns: 1fr; }
}

/* FAQs */
.faq-list { display: grid; gap: 12px; }
.faq-item { border: 1px solid var(--line); border-radius: var(--radius); background: var(--surface); padding: 16px 20px; }
.faq-item summary { cursor: pointer; font-weight: 600; list-style: none; display: flex; justify-content: space-between; }
.faq-item[open] summary svg { transform: rotate(180deg); }
.faq-answer { margin-top: 10px; color: var(--ink-soft); }

/* Enquiry form */
.enquiry-form { display: grid; gap: 12px; }
.enquiry-form label { display: grid; gap: 4px; font-size: 14px; }
.enquiry-form input, .enquiry-form textarea {
    padding: 10px 12px;
    border: 1px solid var(--line);
    border-radius: 10px;
    font: inherit;
}
.enquiry-form .terms { display: flex; align-items: center; gap: 8px; }
.enquiry-project { margin: 0 0 12px; color: var(--ink-soft); }
.form-error { margin: 0; min-height: 1em; color: var(--brand); font-size: 14px; }

/* Footer */
.footer { background: #111114; color: #d8d8de; padding: 56px 0 24px; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 32px; }
.footer-logo { max-height: 44px; }
.footer-title { display: block; margin: 12px 0; font-size: 18px; font-weight: 700; color: #fff; }
.footer-description, .footer-disclaimer, .footer-copyright { font-size: 14px; color: #a6a6b0; }
.footer-links ul { list-style: none; margin: 0; padding: 0; display: grid; gap: 8px; }
.footer-link { text-decoration: none; }
.footer-link:hover { color: #fff; }
.social-links { display: flex; gap: 10px; }
.social-link {
    display: inline-flex;
    width: 36px;
    height: 36px;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    border: 1px solid #33333a;
}
.social-link:hover { border-color: var(--brand); color: #fff; }
.footer-legal { margin-top: 32px; padding-top: 20px; border-top: 1px solid #2a2a30; }
@media (max-width: 860px) {
    .footer-grid { grid-template-columns: 1fr; }
}
"#;

/// Content Security Policy for the rendered page.
///
/// Images and virtual-tour frames may come from any HTTPS origin; scripts
/// and styles are inline only.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; frame-src https:; connect-src 'self';";
