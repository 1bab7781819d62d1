//! CSS styles for the paper browser.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;
    --violet: #6c71c4;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --paper-bg: #f5ecd5;
}

* { box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: var(--bg);
    color: var(--fg);
    margin: 0;
    line-height: 1.5;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

.nav-bar {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.75rem 1.5rem;
    border-bottom: 1px solid var(--border);
}
.nav-bar .brand { font-weight: 600; color: var(--base01); }
.nav-bar .spacer { flex: 1; }
.search-box { display: flex; gap: 0.5rem; }
.search-box input {
    padding: 0.35rem 0.6rem;
    border: 1px solid var(--border);
    background: white;
    min-width: 280px;
}

.conf-nav {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.4rem;
    padding: 0.5rem 1.5rem;
    margin: 0;
    list-style: none;
}
.conf-nav a {
    display: inline-block;
    padding: 0.2rem 0.7rem;
    border: 1px solid var(--blue);
    border-radius: 3px;
}
.conf-nav a.active { background: var(--blue); color: white; }

.container { max-width: 960px; margin: 0 auto; padding: 1rem 1.5rem 3rem; }

.alert {
    padding: 0.75rem 1rem;
    margin: 0.75rem 0;
    border: 1px solid var(--border);
    border-left: 4px solid var(--violet);
    background: white;
}

.paper {
    margin: 1rem 0;
    border: 1px solid var(--border);
    background: var(--paper-bg);
}
.paper-header { display: flex; gap: 1rem; padding: 0.5rem 1rem; }
.paper-info { flex: 1; }
.paper-title { margin: 0.4rem 0; font-size: 1.15rem; color: var(--base01); }
.paper-title a { color: var(--base01); }
.paper-authors, .paper-venue { margin: 0.2rem 0; }
.venue-link { color: var(--red); }
.paper-actions { margin: 0.75rem 0 0.25rem; }
.paper-pdf { align-self: center; text-align: center; font-weight: 600; }
.paper-abstract { padding: 0 1rem 0.75rem; }

.btn {
    display: inline-block;
    padding: 0.3rem 0.8rem;
    border: 1px solid var(--base01);
    background: var(--base01);
    color: white;
    cursor: pointer;
}
.btn:hover { background: var(--base00); color: white; text-decoration: none; }
.btn.hidden { display: none; }

.filter-panel .filter-row {
    display: grid;
    grid-template-columns: 10rem repeat(var(--year-columns), 4.5rem);
    align-items: center;
    padding: 0.2rem 0;
}
.filter-panel .filter-section { border-bottom: 1px solid var(--violet); padding: 0.4rem 0; }
.filter-panel .filter-global { display: flex; justify-content: space-around; }
.filter-panel .cell { text-align: center; }
.filter-panel .venue-cell { border-right: 1px solid var(--violet); }
.filter-panel .filter-submit { padding-top: 0.5rem; }
"#;
