//! HTML templates and styling for the paper browser.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `scripts` - browser glue for incremental loading and the filter cascade
//! - `components` - navigation bar, conference links, base template
//! - `paper` - paper blocks and terminal messages
//! - `filter_panel` - the venue/year checkbox form
//! - `page` - full result pages

mod components;
mod filter_panel;
mod page;
mod paper;
mod scripts;
mod styles;

pub use components::{base_html, conference_nav, nav_bar};
pub use filter_panel::render_filter_panel;
pub use page::render_page;
pub use paper::{alert_html, paper_html, render_batch, terminal_html};
pub use scripts::{FILTER_SCRIPT, LOAD_MORE_SCRIPT, MATHJAX};
pub use styles::STYLE;
