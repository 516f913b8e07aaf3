//! Fixed tag tables: void elements and container elements.

/// Void elements: no children, no closing tag, rendered as `<tag />`.
pub const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Container elements whose raw-text children render unescaped by default.
///
/// Everything outside this table (and not void) defaults to escaping its text
/// children: text-level tags like `p`, `span`, `a`, headings, and `textarea`
/// carry user-visible text, so they escape unless told otherwise.
pub const CONTAINER_TAGS: [&str; 81] = [
    "address",
    "article",
    "aside",
    "audio",
    "bdi",
    "bdo",
    "blockquote",
    "body",
    "button",
    "canvas",
    "caption",
    "cite",
    "code",
    "colgroup",
    "data",
    "datalist",
    "dd",
    "del",
    "details",
    "dfn",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "head",
    "header",
    "hgroup",
    "html",
    "iframe",
    "ins",
    "kbd",
    "legend",
    "li",
    "main",
    "map",
    "mark",
    "menu",
    "meter",
    "nav",
    "noscript",
    "object",
    "ol",
    "optgroup",
    "option",
    "output",
    "picture",
    "pre",
    "progress",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "script",
    "search",
    "section",
    "select",
    "slot",
    "small",
    "style",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "td",
    "template",
    "tfoot",
    "th",
    "thead",
    "time",
    "tr",
    "ul",
    "var",
    "video",
];

/// Whether `tag` is a void element.
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Whether `tag` is a container element (raw text renders unescaped).
pub fn is_container(tag: &str) -> bool {
    CONTAINER_TAGS.contains(&tag)
}
