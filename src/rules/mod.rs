//! Static HTML5 rule tables and validation predicates.
//!
//! The tables define what the builder will accept: the set of known element
//! names, the void (self-closing, childless) subset, the per-element
//! applicability of non-global attributes, and the global attributes legal on
//! any element. Three prefix families are implicitly valid on every element
//! regardless of table membership: `data-*`, `aria-*`, and `on*`.
//!
//! All tables are immutable statics with process lifetime. Lookup is by
//! binary search, so the slices must stay sorted.

/// The designated document root tag. Rendering a node with this tag emits a
/// doctype line.
pub const ROOT_TAG: &str = "html";

/// The doctype line emitted ahead of a rendered root element.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Reserved prefix that routes a dynamic call to the template registry.
pub const TEMPLATE_PREFIX: &str = "tpl_";

/// All valid HTML5 element names, sorted.
pub static ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base",
    "bdi", "bdo", "blockquote", "body", "br", "button", "canvas", "caption",
    "cite", "code", "col", "colgroup", "data", "datalist", "dd", "del",
    "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "head", "header", "hr", "html", "i", "iframe", "img", "input",
    "ins", "kbd", "label", "legend", "li", "link", "main", "map", "mark",
    "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option",
    "output", "p", "param", "picture", "pre", "progress", "q", "rp", "rt",
    "ruby", "s", "samp", "script", "section", "select", "small", "source",
    "span", "strong", "style", "sub", "summary", "sup", "svg", "table",
    "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time",
    "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

/// Attributes legal on every element, sorted.
pub static GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "dropzone",
    "hidden",
    "id",
    "lang",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
];

/// Non-global attributes and the elements that accept them, sorted by
/// attribute name.
pub static ATTRIBUTES: &[(&str, &[&str])] = &[
    ("accept", &["input"]),
    ("accept-charset", &["form"]),
    ("action", &["form"]),
    ("alt", &["area", "img", "input"]),
    ("async", &["script"]),
    ("autocomplete", &["form", "input"]),
    ("autofocus", &["button", "input", "select", "textarea"]),
    ("autoplay", &["audio", "video"]),
    ("charset", &["meta", "script"]),
    ("checked", &["input"]),
    ("cite", &["blockquote", "del", "ins", "q"]),
    ("cols", &["textarea"]),
    ("colspan", &["td", "th"]),
    ("content", &["meta"]),
    ("controls", &["audio", "video"]),
    ("coords", &["area"]),
    ("data", &["object"]),
    ("datetime", &["del", "ins", "time"]),
    ("default", &["track"]),
    ("defer", &["script"]),
    ("dirname", &["input", "textarea"]),
    (
        "disabled",
        &[
            "button", "fieldset", "input", "optgroup", "option", "select",
            "textarea",
        ],
    ),
    ("download", &["a", "area"]),
    ("enctype", &["form"]),
    ("for", &["label", "output"]),
    (
        "form",
        &[
            "button", "fieldset", "input", "label", "meter", "object",
            "output", "select", "textarea",
        ],
    ),
    ("formaction", &["button", "input"]),
    ("headers", &["td", "th"]),
    (
        "height",
        &["canvas", "embed", "iframe", "img", "input", "object", "video"],
    ),
    ("high", &["meter"]),
    ("href", &["a", "area", "base", "link"]),
    ("hreflang", &["a", "area", "link"]),
    ("http-equiv", &["meta"]),
    ("ismap", &["img"]),
    ("kind", &["track"]),
    ("label", &["optgroup", "option", "track"]),
    ("list", &["input"]),
    ("loop", &["audio", "video"]),
    ("low", &["meter"]),
    ("max", &["input", "meter", "progress"]),
    ("maxlength", &["input", "textarea"]),
    ("media", &["a", "area", "link", "source", "style"]),
    ("method", &["form"]),
    ("min", &["input", "meter"]),
    ("multiple", &["input", "select"]),
    ("muted", &["audio", "video"]),
    (
        "name",
        &[
            "button", "fieldset", "form", "iframe", "input", "map", "meta",
            "object", "output", "param", "select", "textarea",
        ],
    ),
    ("novalidate", &["form"]),
    ("open", &["details"]),
    ("optimum", &["meter"]),
    ("pattern", &["input"]),
    ("placeholder", &["input", "textarea"]),
    ("poster", &["video"]),
    ("preload", &["audio", "video"]),
    ("readonly", &["input", "textarea"]),
    ("rel", &["a", "area", "link"]),
    ("required", &["input", "select", "textarea"]),
    ("reversed", &["ol"]),
    ("rows", &["textarea"]),
    ("rowspan", &["td", "th"]),
    ("sandbox", &["iframe"]),
    ("scope", &["th"]),
    ("selected", &["option"]),
    ("shape", &["area"]),
    ("size", &["input", "select"]),
    ("sizes", &["img", "link", "source"]),
    ("span", &["col", "colgroup"]),
    (
        "src",
        &[
            "audio", "embed", "iframe", "img", "input", "script", "source",
            "track", "video",
        ],
    ),
    ("srcdoc", &["iframe"]),
    ("srclang", &["track"]),
    ("srcset", &["img", "source"]),
    ("start", &["ol"]),
    ("step", &["input"]),
    ("target", &["a", "area", "base", "form"]),
    (
        "type",
        &[
            "button", "embed", "input", "link", "object", "script", "source",
            "style",
        ],
    ),
    ("usemap", &["img", "object"]),
    (
        "value",
        &["button", "input", "li", "meter", "option", "param", "progress"],
    ),
    (
        "width",
        &["canvas", "embed", "iframe", "img", "input", "object", "video"],
    ),
    ("wrap", &["textarea"]),
];

/// Returns true if `tag` is a known HTML5 element name.
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    ELEMENTS.binary_search(&tag).is_ok()
}

/// Returns true if `tag` is the designated document root tag (`html`).
///
/// Root detection is by tag identity, not by parentage: any node tagged
/// `html` triggers doctype emission when rendered standalone.
#[must_use]
pub fn is_root_tag(tag: &str) -> bool {
    tag == ROOT_TAG
}

/// Returns true if `tag` is a void element: it never has children and
/// renders self-closing.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Returns true if `attr` is valid on an element with the given `tag`.
///
/// An attribute is accepted when it is a global attribute, starts with one of
/// the wildcard prefixes (`data-`, `aria-`, `on`), or is listed in
/// [`ATTRIBUTES`] with `tag` among its accepting elements.
#[must_use]
pub fn is_valid_attr(tag: &str, attr: &str) -> bool {
    if GLOBAL_ATTRIBUTES.binary_search(&attr).is_ok() {
        return true;
    }
    if attr.starts_with("data-") || attr.starts_with("aria-") || attr.starts_with("on") {
        return true;
    }
    match ATTRIBUTES.binary_search_by_key(&attr, |&(name, _)| name) {
        Ok(idx) => ATTRIBUTES[idx].1.contains(&tag),
        Err(_) => false,
    }
}

/// Normalizes a dynamically dispatched attribute name.
///
/// A single leading underscore is stripped (it disambiguates attribute names
/// that collide with reserved call names, e.g. `_title`), then remaining
/// underscores are rewritten to hyphens so callers can write identifier-safe
/// names for hyphenated attributes (`http_equiv` → `http-equiv`).
#[must_use]
pub fn normalize_attr_name(name: &str) -> String {
    let name = name.strip_prefix('_').unwrap_or(name);
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_sorted() {
        let mut sorted = ELEMENTS.to_vec();
        sorted.sort_unstable();
        assert_eq!(ELEMENTS, sorted.as_slice());
    }

    #[test]
    fn test_global_attributes_sorted() {
        let mut sorted = GLOBAL_ATTRIBUTES.to_vec();
        sorted.sort_unstable();
        assert_eq!(GLOBAL_ATTRIBUTES, sorted.as_slice());
    }

    #[test]
    fn test_attributes_sorted_by_name() {
        for pair in ATTRIBUTES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_void_elements_are_valid_tags() {
        for tag in ELEMENTS {
            if is_void(tag) {
                assert!(is_valid_tag(tag));
            }
        }
        // Every void element must also appear in ELEMENTS.
        for tag in [
            "area", "base", "br", "col", "embed", "hr", "img", "input",
            "link", "meta", "param", "source", "track", "wbr",
        ] {
            assert!(is_valid_tag(tag), "void element {tag} missing from ELEMENTS");
        }
    }

    #[test]
    fn test_is_valid_tag() {
        assert!(is_valid_tag("div"));
        assert!(is_valid_tag("a"));
        assert!(is_valid_tag("wbr"));
        assert!(!is_valid_tag("blink"));
        assert!(!is_valid_tag("DIV"));
        assert!(!is_valid_tag(""));
    }

    #[test]
    fn test_is_root_tag() {
        assert!(is_root_tag("html"));
        assert!(!is_root_tag("body"));
    }

    #[test]
    fn test_html_is_not_void() {
        assert!(!is_void("html"));
    }

    #[test]
    fn test_global_attr_valid_on_any_tag() {
        assert!(is_valid_attr("div", "class"));
        assert!(is_valid_attr("span", "id"));
        assert!(is_valid_attr("html", "lang"));
    }

    #[test]
    fn test_wildcard_prefixes() {
        assert!(is_valid_attr("div", "data-toggle"));
        assert!(is_valid_attr("button", "aria-label"));
        assert!(is_valid_attr("a", "onclick"));
        assert!(is_valid_attr("body", "onload"));
    }

    #[test]
    fn test_tag_specific_attrs() {
        assert!(is_valid_attr("input", "accept"));
        assert!(!is_valid_attr("div", "accept"));
        assert!(is_valid_attr("a", "href"));
        assert!(!is_valid_attr("p", "href"));
        assert!(is_valid_attr("meta", "http-equiv"));
    }

    #[test]
    fn test_unknown_attr_rejected() {
        assert!(!is_valid_attr("div", "hrref"));
        assert!(!is_valid_attr("div", ""));
    }

    #[test]
    fn test_normalize_attr_name() {
        assert_eq!(normalize_attr_name("_title"), "title");
        assert_eq!(normalize_attr_name("http_equiv"), "http-equiv");
        assert_eq!(normalize_attr_name("accept_charset"), "accept-charset");
        assert_eq!(normalize_attr_name("data_toggle"), "data-toggle");
        assert_eq!(normalize_attr_name("class"), "class");
        // Only one leading underscore is stripped.
        assert_eq!(normalize_attr_name("__x"), "-x");
    }
}
