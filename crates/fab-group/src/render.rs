use std::fmt;
use std::str::FromStr;

use fab_core::{ErrorInfo, FabError, GroupOrder};
use serde::{Deserialize, Serialize};

use crate::GroupDescriptor;

/// One of the two normal forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Cyclic groups of prime-power order.
    Primary,
    /// Divisor chain of cyclic groups.
    Invariant,
}

/// Which normal forms to show for each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decomposition {
    /// Primary decomposition only.
    #[default]
    Primary,
    /// Invariant-factor decomposition only.
    Invariant,
    /// Primary form followed by its invariant-factor equivalent.
    Both,
}

impl Decomposition {
    /// The forms rendered, in display order.
    pub fn forms(&self) -> &'static [Form] {
        match self {
            Decomposition::Primary => &[Form::Primary],
            Decomposition::Invariant => &[Form::Invariant],
            Decomposition::Both => &[Form::Primary, Form::Invariant],
        }
    }
}

/// Textual template for cyclic groups and their products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// `Z/4 × Z/9`
    #[default]
    Text,
    /// `ℤ/4 ⊕ ℤ/9`
    Unicode,
    /// `Z/4 x Z/9`
    Ascii,
    /// `\Z/4 \oplus \Z/9`, relying on `\newcommand{\Z}{\mathbb Z}`.
    Tex,
}

impl Notation {
    fn cyclic(&self, order: u64) -> String {
        match self {
            Notation::Text | Notation::Ascii => format!("Z/{order}"),
            Notation::Unicode => format!("ℤ/{order}"),
            Notation::Tex => format!("\\Z/{order}"),
        }
    }

    fn product(&self) -> &'static str {
        match self {
            Notation::Text => " × ",
            Notation::Unicode => " ⊕ ",
            Notation::Ascii => " x ",
            Notation::Tex => " \\oplus ",
        }
    }

    fn isomorphic(&self) -> &'static str {
        match self {
            Notation::Text | Notation::Unicode => " ≅ ",
            Notation::Ascii => " ~= ",
            Notation::Tex => " \\cong ",
        }
    }
}

/// Renders a product of cyclic groups. An empty list is the trivial group.
pub fn render_orders(orders: &[u64], notation: Notation) -> String {
    if orders.is_empty() {
        return notation.cyclic(1);
    }
    orders
        .iter()
        .map(|&order| notation.cyclic(order))
        .collect::<Vec<_>>()
        .join(notation.product())
}

/// Renders a group in one normal form.
pub fn render(group: &GroupDescriptor, form: Form, notation: Notation) -> String {
    match form {
        Form::Primary => render_orders(&group.primary.cyclic_orders(), notation),
        Form::Invariant => render_orders(group.invariant.factors(), notation),
    }
}

/// Renders a group as one line holding every requested form.
pub fn render_line(
    group: &GroupDescriptor,
    decomposition: Decomposition,
    notation: Notation,
) -> String {
    decomposition
        .forms()
        .iter()
        .map(|&form| render(group, form, notation))
        .collect::<Vec<_>>()
        .join(notation.isomorphic())
}

/// Summary sentence such as "There are 2 abelian groups of order 4."
pub fn headline(count: u64, order: GroupOrder) -> String {
    if count == 1 {
        format!("There is one abelian group of order {order}.")
    } else {
        format!("There are {count} abelian groups of order {order}.")
    }
}

/// Wraps rendered rows in a standalone amsart document. The headline
/// sentence is only written when `with_headline` is set.
pub fn tex_document(
    order: GroupOrder,
    count: u64,
    rows: &[String],
    with_headline: bool,
) -> String {
    let mut doc = String::new();
    doc.push_str("\\documentclass{amsart}\n");
    doc.push_str("\\newcommand{\\Z}{\\mathbb Z}\n");
    doc.push_str(&format!("\\title{{Abelian Groups of Order {order}}}\n"));
    doc.push_str("\\begin{document}\n");
    doc.push_str("\\maketitle\n");
    if with_headline {
        doc.push_str(&headline(count, order));
        doc.push('\n');
    }
    doc.push_str("\\begin{gather*}\n");
    doc.push_str(&rows.join("\\\\\n"));
    doc.push('\n');
    doc.push_str("\\end{gather*}\n");
    doc.push_str("\\end{document}\n");
    doc
}

fn unknown_variant(kind: &str, text: &str, expected: &str) -> FabError {
    FabError::Config(
        ErrorInfo::new("config-parse", format!("unknown {kind} `{text}`"))
            .with_hint(format!("expected one of: {expected}")),
    )
}

impl FromStr for Notation {
    type Err = FabError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Notation::Text),
            "unicode" => Ok(Notation::Unicode),
            "ascii" => Ok(Notation::Ascii),
            "tex" | "latex" => Ok(Notation::Tex),
            _ => Err(unknown_variant("notation", text, "text, unicode, ascii, tex")),
        }
    }
}

impl FromStr for Decomposition {
    type Err = FabError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Decomposition::Primary),
            "invariant" => Ok(Decomposition::Invariant),
            "both" => Ok(Decomposition::Both),
            _ => Err(unknown_variant(
                "decomposition",
                text,
                "primary, invariant, both",
            )),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Notation::Text => "text",
            Notation::Unicode => "unicode",
            Notation::Ascii => "ascii",
            Notation::Tex => "tex",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decomposition::Primary => "primary",
            Decomposition::Invariant => "invariant",
            Decomposition::Both => "both",
        };
        f.write_str(name)
    }
}
