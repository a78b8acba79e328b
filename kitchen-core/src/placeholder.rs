//! Placeholder images (offline safe)
//!
//! Self-contained SVG data URIs shown when a declared image is missing or
//! fails to load, plus the per-image fallback state that guarantees the
//! substitution happens at most once.

/// Default placeholder size for menu cards
pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 300;

/// Larger placeholder used by the specials grid
pub const SPECIAL_WIDTH: u32 = 800;
pub const SPECIAL_HEIGHT: u32 = 600;

/// Titles longer than this are cut and suffixed with `...`
const MAX_TITLE_CHARS: usize = 26;
const TRUNCATED_CHARS: usize = 23;

const BACKGROUND: &str = "#fff8f2";
const FOREGROUND: &str = "#c2410c";

/// Placeholder at the default 400×300 size
pub fn placeholder_data_uri(title: &str) -> String {
    placeholder_data_uri_sized(title, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// `data:image/svg+xml` URI with the (shortened) title centered on a neutral background
pub fn placeholder_data_uri_sized(title: &str, width: u32, height: u32) -> String {
    let short = shorten_title(title);
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' \
         viewBox='0 0 {width} {height}'><rect width='100%' height='100%' fill='{BACKGROUND}'/>\
         <text x='50%' y='50%' text-anchor='middle' dominant-baseline='middle' \
         font-family='Helvetica, Arial, sans-serif' font-size='18' fill='{FOREGROUND}'>{}</text></svg>",
        escape_xml(&short)
    );
    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg))
}

/// Cut to 23 chars + `...` when longer than 26 chars (counted in chars, not bytes)
pub fn shorten_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let head: String = title.chars().take(TRUNCATED_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

pub fn escape_xml(s: &str) -> String {
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

/// Image source with a one-shot fallback
///
/// Mirrors an `<img>` whose error handler detaches itself after the first
/// substitution: the first failure swaps in the placeholder, later failures
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub alt: String,
    /// What the element shows initially
    pub src: String,
    /// Placeholder to swap in on load failure
    pub fallback: String,
    fallen_back: bool,
}

impl ImageSource {
    /// Declared path if any, placeholder otherwise
    pub fn new(alt: &str, declared: &str, width: u32, height: u32) -> Self {
        let fallback = placeholder_data_uri_sized(alt, width, height);
        let declared = declared.trim();
        let (src, fallen_back) = if declared.is_empty() {
            (fallback.clone(), true)
        } else {
            (declared.to_string(), false)
        };
        Self {
            alt: alt.to_string(),
            src,
            fallback,
            fallen_back,
        }
    }

    /// Load failure: returns the new source the first time, `None` afterwards
    pub fn on_error(&mut self) -> Option<&str> {
        if self.fallen_back {
            return None;
        }
        self.fallen_back = true;
        self.src = self.fallback.clone();
        Some(&self.src)
    }

    /// Error handler still attached
    pub fn is_armed(&self) -> bool {
        !self.fallen_back
    }
}

/// Source for the page-wide safety net: placeholder from the element's alt text
pub fn safety_net_source(alt: Option<&str>) -> String {
    let name = alt.map(str::trim).filter(|a| !a.is_empty()).unwrap_or("Image");
    placeholder_data_uri(name)
}
