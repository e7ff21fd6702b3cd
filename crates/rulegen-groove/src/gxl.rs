//! The GXL structural tree and its XML rendering.
//!
//! The target shape is fixed by GROOVE:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <gxl xmlns="http://www.gupro.de/GXL/gxl-1.0.dtd">
//!     <graph id="NAME" role="rule" edgeids="false" edgemode="directed">
//!         <node id="n0"/>
//!         <edge from="n0" to="n0">
//!             <attr name="label">
//!                 <string>TEXT</string>
//!             </attr>
//!         </edge>
//!     </graph>
//! </gxl>
//! ```
//!
//! A graph holds one heterogeneous element list: nodes and edges interleave
//! in creation order, and the rendering preserves that order byte for byte.

use std::fmt::Write as _;

const GXL_NAMESPACE: &str = "http://www.gupro.de/GXL/gxl-1.0.dtd";
const INDENT: &str = "    ";

/// The GXL document root.
#[derive(Debug, Clone, Default)]
pub struct Gxl {
    pub graphs: Vec<GxlGraph>,
}

/// One graph element inside a GXL document.
#[derive(Debug, Clone)]
pub struct GxlGraph {
    pub id: String,
    pub role: String,
    pub edgeids: String,
    pub edgemode: String,
    pub elements: Vec<GxlElement>,
}

/// Nodes and edges share one list so emission order survives rendering.
#[derive(Debug, Clone)]
pub enum GxlElement {
    Node(GxlNode),
    Edge(GxlEdge),
}

#[derive(Debug, Clone)]
pub struct GxlNode {
    pub id: String,
    /// `"<x> <y> 0 0"`, set by the layouter.
    pub layout: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GxlEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

impl Gxl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document to the fixed GROOVE XML shape.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        if self.graphs.is_empty() {
            let _ = writeln!(out, "<gxl xmlns=\"{GXL_NAMESPACE}\"/>");
            return out;
        }
        let _ = writeln!(out, "<gxl xmlns=\"{GXL_NAMESPACE}\">");
        for graph in &self.graphs {
            graph.render(&mut out);
        }
        out.push_str("</gxl>\n");
        out
    }
}

impl GxlGraph {
    /// A graph with the attributes GROOVE expects on both rules and start
    /// graphs.
    pub fn standard(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: "rule".to_string(),
            edgeids: "false".to_string(),
            edgemode: "directed".to_string(),
            elements: Vec::new(),
        }
    }

    /// Append a node.
    pub fn add_node(&mut self, id: impl Into<String>) {
        self.elements.push(GxlElement::Node(GxlNode {
            id: id.into(),
            layout: None,
        }));
    }

    /// Append a labeled edge.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.elements.push(GxlElement::Edge(GxlEdge {
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }));
    }

    /// The node elements in emission order.
    pub fn nodes(&self) -> impl Iterator<Item = &GxlNode> {
        self.elements.iter().filter_map(|e| match e {
            GxlElement::Node(node) => Some(node),
            GxlElement::Edge(_) => None,
        })
    }

    /// The edge elements in emission order.
    pub fn edges(&self) -> impl Iterator<Item = &GxlEdge> {
        self.elements.iter().filter_map(|e| match e {
            GxlElement::Edge(edge) => Some(edge),
            GxlElement::Node(_) => None,
        })
    }

    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            "{INDENT}<graph id=\"{}\" role=\"{}\" edgeids=\"{}\" edgemode=\"{}\"",
            escape_attr(&self.id),
            escape_attr(&self.role),
            escape_attr(&self.edgeids),
            escape_attr(&self.edgemode),
        );
        if self.elements.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push_str(">\n");
        for element in &self.elements {
            match element {
                GxlElement::Node(node) => node.render(out),
                GxlElement::Edge(edge) => edge.render(out),
            }
        }
        let _ = writeln!(out, "{INDENT}</graph>");
    }
}

impl GxlNode {
    fn render(&self, out: &mut String) {
        let id = escape_attr(&self.id);
        match &self.layout {
            None => {
                let _ = writeln!(out, "{}<node id=\"{id}\"/>", INDENT.repeat(2));
            }
            Some(layout) => {
                let _ = writeln!(out, "{}<node id=\"{id}\">", INDENT.repeat(2));
                render_attr(out, "layout", layout);
                let _ = writeln!(out, "{}</node>", INDENT.repeat(2));
            }
        }
    }
}

impl GxlEdge {
    fn render(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{}<edge from=\"{}\" to=\"{}\">",
            INDENT.repeat(2),
            escape_attr(&self.from),
            escape_attr(&self.to),
        );
        render_attr(out, "label", &self.label);
        let _ = writeln!(out, "{}</edge>", INDENT.repeat(2));
    }
}

fn render_attr(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "{}<attr name=\"{name}\">", INDENT.repeat(3));
    let _ = writeln!(out, "{}<string>{}</string>", INDENT.repeat(4), escape_text(value));
    let _ = writeln!(out, "{}</attr>", INDENT.repeat(3));
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
