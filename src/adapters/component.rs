//! Wrapper component synthesis
//!
//! Turns a parsed SVG tree into a ref-forwarding React component:
//!
//! ```text
//! function ArrowRight({ title, titleId, ...props }, svgRef) {
//!   return React.createElement("svg", Object.assign({ ..., ref: svgRef }, props), ...);
//! }
//! const ForwardRef = React.forwardRef(ArrowRight);
//! ```
//!
//! The body is identical for both formats. `to_module_form` and
//! `to_common_form` only differ in the React import and the default export.

use std::path::Path;

use crate::adapters::escaping::{is_numeric_literal, js_key, js_string};
use crate::error::IconResult;
use crate::models::Format;
use crate::svg::{self, Element, Node};

/// Annotation telling bundlers a call has no side effects
const PURE: &str = "/*#__PURE__*/";

/// JSDoc marker for deprecated icons
pub const DEPRECATED_MARKER: &str = "/** @deprecated */";

/// Indentation of the `return` expression inside the component function
const INDENT: &str = "  ";

/// A format-neutral wrapper component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentModule {
    identifier: String,
    deprecated: bool,
    root: Element,
    /// Text of a `<title>` already present in the source, used as fallback
    fallback_title: Option<String>,
}

impl ComponentModule {
    /// Build a module from a parsed `<svg>` root
    pub fn new(identifier: impl Into<String>, mut root: Element, deprecated: bool) -> Self {
        let mut fallback_title = None;
        root.children.retain(|node| match node {
            Node::Element(el) if el.name == "title" => {
                if fallback_title.is_none() {
                    fallback_title = Some(el.text());
                }
                false
            }
            _ => true,
        });

        Self {
            identifier: identifier.into(),
            deprecated,
            root,
            fallback_title,
        }
    }

    /// Parse markup and build a module from it
    pub fn from_markup(
        markup: &str,
        identifier: &str,
        deprecated: bool,
        file: &Path,
    ) -> IconResult<Self> {
        let root = svg::parse(markup, file)?;
        Ok(Self::new(identifier, root, deprecated))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Everything between the React import and the default export
    fn body(&self) -> String {
        let mut out = String::new();

        if self.deprecated {
            out.push_str(DEPRECATED_MARKER);
            out.push('\n');
        }

        out.push_str(&format!("function {}({{\n", self.identifier));
        out.push_str("  title,\n  titleId,\n  ...props\n}, svgRef) {\n");
        out.push_str(&format!("{INDENT}return {};\n", self.render_root()));
        out.push_str("}\n");
        out.push_str(&format!(
            "const ForwardRef = {PURE} React.forwardRef({});\n",
            self.identifier
        ));

        out
    }

    fn render_root(&self) -> String {
        let mut props: Vec<(String, String)> = self
            .root
            .attributes
            .iter()
            .filter(|(name, _)| name != "ref" && name != "aria-labelledby")
            .map(|(name, value)| convert_attribute(name, value))
            .collect();
        props.push(("ref".to_string(), "svgRef".to_string()));
        props.push(("\"aria-labelledby\"".to_string(), "titleId".to_string()));

        let mut children = vec![self.render_title()];
        children.extend(self.root.children.iter().map(render_node));

        create_element(
            &self.root.name,
            &format!("Object.assign({}, props)", render_object(&props)),
            &children,
        )
    }

    fn render_title(&self) -> String {
        let props = render_object(&[("id".to_string(), "titleId".to_string())]);
        let from_prop = create_element("title", &props, &["title".to_string()]);

        match &self.fallback_title {
            Some(text) => {
                let from_source = create_element("title", &props, &[js_string(text)]);
                format!("title === undefined ? {from_source} : title ? {from_prop} : null")
            }
            None => format!("title ? {from_prop} : null"),
        }
    }
}

/// Render with ES module syntax
pub fn to_module_form(module: &ComponentModule) -> String {
    format!(
        "import * as React from \"react\";\n{}export default ForwardRef;\n",
        module.body()
    )
}

/// Render with CommonJS syntax
pub fn to_common_form(module: &ComponentModule) -> String {
    format!(
        "const React = require(\"react\");\n{}module.exports = ForwardRef;\n",
        module.body()
    )
}

/// Render a module in the given format
pub fn render(module: &ComponentModule, format: Format) -> String {
    match format {
        Format::Esm => to_module_form(module),
        Format::Cjs => to_common_form(module),
    }
}

/// Parse markup and render the wrapper component in one step
pub fn synthesize(
    markup: &str,
    identifier: &str,
    format: Format,
    deprecated: bool,
    file: &Path,
) -> IconResult<String> {
    let module = ComponentModule::from_markup(markup, identifier, deprecated, file)?;
    Ok(render(&module, format))
}

fn render_node(node: &Node) -> String {
    match node {
        Node::Text(text) => js_string(text),
        Node::Element(el) => {
            let props = if el.attributes.is_empty() {
                "null".to_string()
            } else {
                let converted: Vec<_> = el
                    .attributes
                    .iter()
                    .map(|(name, value)| convert_attribute(name, value))
                    .collect();
                render_object(&converted)
            };
            let children: Vec<_> = el.children.iter().map(render_node).collect();
            create_element(&el.name, &props, &children)
        }
    }
}

fn create_element(tag: &str, props: &str, children: &[String]) -> String {
    let mut out = format!("{PURE}React.createElement({}, {}", js_string(tag), props);
    for child in children {
        out.push_str(", ");
        out.push_str(child);
    }
    out.push(')');
    out
}

fn render_object(entries: &[(String, String)]) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{INDENT}{INDENT}{key}: {value}"))
        .collect();
    format!("{{\n{}\n{INDENT}}}", lines.join(",\n"))
}

/// Convert an SVG attribute to a `(key, value)` pair of JS source
fn convert_attribute(name: &str, value: &str) -> (String, String) {
    let prop = prop_name(name);
    let rendered = if prop == "style" {
        render_style(value)
    } else if is_numeric_literal(value) {
        value.to_string()
    } else {
        js_string(value)
    };
    (js_key(&prop), rendered)
}

/// React prop name for an SVG attribute
pub fn prop_name(attribute: &str) -> String {
    match attribute {
        "class" => return "className".to_string(),
        "for" => return "htmlFor".to_string(),
        _ => {}
    }

    if attribute.starts_with("aria-") || attribute.starts_with("data-") {
        return attribute.to_string();
    }

    camelize(attribute, &['-', ':'])
}

fn camelize(s: &str, separators: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if separators.contains(&c) {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Inline `style="a: b; c-d: e"` as `{ a: "b", cD: "e" }`
fn render_style(style: &str) -> String {
    let entries: Vec<String> = split_declarations(style)
        .into_iter()
        .filter_map(|decl| decl.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| {
            let prop = if key.starts_with("--") {
                key.to_string()
            } else if let Some(vendor) = key.strip_prefix('-') {
                let camel = camelize(vendor, &['-']);
                let mut chars = camel.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => camel,
                }
            } else {
                camelize(key, &['-'])
            };
            let value = if is_numeric_literal(value) {
                value.to_string()
            } else {
                js_string(value)
            };
            format!("{}: {}", js_key(&prop), value)
        })
        .collect();

    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}

/// Split on `;` outside parentheses and quotes, so `url(data:...;base64,...)`
/// stays one declaration
fn split_declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROW: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor"><path stroke-linecap="round" d="M4.5 12h15"/></svg>"#;

    const ARROW_ESM: &str = r#"import * as React from "react";
function ArrowRight({
  title,
  titleId,
  ...props
}, svgRef) {
  return /*#__PURE__*/React.createElement("svg", Object.assign({
    xmlns: "http://www.w3.org/2000/svg",
    fill: "none",
    viewBox: "0 0 24 24",
    strokeWidth: 1.5,
    stroke: "currentColor",
    ref: svgRef,
    "aria-labelledby": titleId
  }, props), title ? /*#__PURE__*/React.createElement("title", {
    id: titleId
  }, title) : null, /*#__PURE__*/React.createElement("path", {
    strokeLinecap: "round",
    d: "M4.5 12h15"
  }));
}
const ForwardRef = /*#__PURE__*/ React.forwardRef(ArrowRight);
export default ForwardRef;
"#;

    fn arrow(format: Format, deprecated: bool) -> String {
        synthesize(ARROW, "ArrowRight", format, deprecated, Path::new("arrow-right.svg")).unwrap()
    }

    #[test]
    fn module_form_matches_expected_source() {
        assert_eq!(arrow(Format::Esm, false), ARROW_ESM);
    }

    #[test]
    fn common_form_only_rewrites_import_and_export() {
        let expected = ARROW_ESM
            .replace(
                "import * as React from \"react\";",
                "const React = require(\"react\");",
            )
            .replace("export default ForwardRef;", "module.exports = ForwardRef;");
        assert_eq!(arrow(Format::Cjs, false), expected);
    }

    #[test]
    fn deprecated_marker_precedes_declaration() {
        let source = arrow(Format::Esm, true);
        let lines: Vec<_> = source.lines().collect();
        assert_eq!(lines[1], DEPRECATED_MARKER);
        assert!(lines[2].starts_with("function ArrowRight("));
        assert!(!arrow(Format::Esm, false).contains("@deprecated"));
    }

    #[test]
    fn forward_ref_call_is_pure() {
        let source = arrow(Format::Cjs, false);
        assert!(source.contains("/*#__PURE__*/ React.forwardRef(ArrowRight)"));
        assert_eq!(
            source.matches("React.createElement(").count(),
            source.matches("/*#__PURE__*/React.createElement(").count()
        );
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(arrow(Format::Esm, true), arrow(Format::Esm, true));
        assert_eq!(arrow(Format::Cjs, false), arrow(Format::Cjs, false));
    }

    #[test]
    fn source_title_becomes_fallback() {
        let markup = r#"<svg viewBox="0 0 20 20"><title>Home</title><path d="M0 0"/></svg>"#;
        let source =
            synthesize(markup, "Home", Format::Esm, false, Path::new("home.svg")).unwrap();
        assert!(source.contains("title === undefined ? /*#__PURE__*/React.createElement(\"title\", {\n    id: titleId\n  }, \"Home\") : title ?"));
        assert_eq!(source.matches("\"title\"").count(), 2);
    }

    #[test]
    fn nested_groups_and_attributeless_elements() {
        let markup = r#"<svg><g><path d="M1 1"/></g></svg>"#;
        let source =
            synthesize(markup, "Group", Format::Esm, false, Path::new("group.svg")).unwrap();
        assert!(source.contains(
            "/*#__PURE__*/React.createElement(\"g\", null, /*#__PURE__*/React.createElement(\"path\", {\n    d: \"M1 1\"\n  }))"
        ));
    }

    #[test]
    fn text_children_are_escaped_strings() {
        let markup = r#"<svg><text x="1">Say "hi"</text></svg>"#;
        let source =
            synthesize(markup, "Text", Format::Esm, false, Path::new("text.svg")).unwrap();
        assert!(source.contains("}, \"Say \\\"hi\\\"\")"));
    }

    #[test]
    fn prop_names() {
        assert_eq!(prop_name("stroke-width"), "strokeWidth");
        assert_eq!(prop_name("fill-rule"), "fillRule");
        assert_eq!(prop_name("class"), "className");
        assert_eq!(prop_name("xlink:href"), "xlinkHref");
        assert_eq!(prop_name("xml:space"), "xmlSpace");
        assert_eq!(prop_name("xmlns:xlink"), "xmlnsXlink");
        assert_eq!(prop_name("aria-hidden"), "aria-hidden");
        assert_eq!(prop_name("data-slot"), "data-slot");
        assert_eq!(prop_name("viewBox"), "viewBox");
    }

    #[test]
    fn style_becomes_object() {
        assert_eq!(
            render_style("fill: red; stroke-width: 2;"),
            "{ fill: \"red\", strokeWidth: 2 }"
        );
        assert_eq!(
            render_style("-webkit-transform: none"),
            "{ WebkitTransform: \"none\" }"
        );
        assert_eq!(render_style("--accent: #fff"), "{ \"--accent\": \"#fff\" }");
        assert_eq!(render_style(" ; "), "{}");
    }

    #[test]
    fn style_keeps_semicolons_inside_values() {
        assert_eq!(
            render_style("mask: url(data:image/png;base64,AAAA); fill: red"),
            "{ mask: \"url(data:image/png;base64,AAAA)\", fill: \"red\" }"
        );
        assert_eq!(
            render_style("font-family: 'a;b', serif"),
            "{ fontFamily: \"'a;b', serif\" }"
        );
    }

    #[test]
    fn data_and_aria_keys_are_quoted() {
        let markup = r#"<svg aria-hidden="true" data-slot="icon"/>"#;
        let source = synthesize(markup, "Slot", Format::Esm, false, Path::new("s.svg")).unwrap();
        assert!(source.contains("    \"aria-hidden\": \"true\",\n    \"data-slot\": \"icon\",\n    ref: svgRef"));
    }

    #[test]
    fn invalid_markup_is_an_error() {
        let err = synthesize("<svg><path>", "Broken", Format::Esm, false, Path::new("b.svg"));
        assert!(err.is_err());
    }
}
