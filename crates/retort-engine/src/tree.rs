use retort_core::ConfigurationError;

pub type NodeId = usize;

/// Level of a node in the fixed 4-level schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    Root,
    /// "q" (question) or "s" (statement)
    Category,
    /// "p" (non-negative) or "n" (negative)
    Sentiment,
    /// A single lowercase word, or "" for the fallback bucket
    Topic,
    /// A full reply string, case preserved
    Leaf,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub label: String,
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

/// The lookup tree, arena-backed: nodes live in one vec, children are
/// index lists, node 0 is the root. Built once at startup, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponseTree {
    nodes: Vec<Node>,
}

impl ResponseTree {
    pub const ROOT: NodeId = 0;

    /// Build the tree from tabular rows, one root-to-reply path per
    /// row: `[category, sentiment, topic, reply, reply...]`.
    ///
    /// Rows whose first cell is blank are skipped. Everything else is
    /// validated against the 4-level schema; violations are
    /// `ConfigurationError::MalformedRow` with a 1-based row number.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, ConfigurationError> {
        let mut tree = Self {
            nodes: vec![Node {
                label: "root".to_string(),
                kind: NodeKind::Root,
                children: Vec::new(),
            }],
        };

        for (idx, row) in rows.iter().enumerate() {
            let row_no = idx + 1;
            let malformed = |reason: String| ConfigurationError::MalformedRow {
                row: row_no,
                reason,
            };

            if row.first().map_or(true, |c| c.trim().is_empty()) {
                continue;
            }
            if row.len() < 4 {
                return Err(malformed(format!(
                    "expected at least 4 cells (category, sentiment, topic, reply), got {}",
                    row.len()
                )));
            }

            let category = row[0].trim().to_lowercase();
            if category != "q" && category != "s" {
                return Err(malformed(format!(
                    "category must be 'q' or 's', got '{category}'"
                )));
            }

            let sentiment = row[1].trim().to_lowercase();
            if sentiment != "p" && sentiment != "n" {
                return Err(malformed(format!(
                    "sentiment must be 'p' or 'n', got '{sentiment}'"
                )));
            }

            let topic = row[2].trim();
            if topic.split_whitespace().count() > 1 {
                return Err(malformed(format!(
                    "topic must be a single word or empty, got '{topic}'"
                )));
            }
            let topic = topic.to_lowercase();

            let cat_id = tree.insert_child(Self::ROOT, &category, NodeKind::Category);
            let sent_id = tree.insert_child(cat_id, &sentiment, NodeKind::Sentiment);
            let topic_id = tree.insert_child(sent_id, &topic, NodeKind::Topic);

            for cell in &row[3..] {
                if cell.trim().is_empty() {
                    return Err(malformed("blank reply cell".to_string()));
                }
                let label = normalize_label(cell);
                tree.insert_child(topic_id, &label, NodeKind::Leaf);
            }
        }

        Ok(tree)
    }

    /// Idempotent insertion: an existing child with the same label is
    /// reused, so siblings stay unique and keep first-insertion order.
    fn insert_child(&mut self, parent: NodeId, label: &str, kind: NodeKind) -> NodeId {
        if let Some(existing) = self.child(parent, label) {
            return existing;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            label: label.to_string(),
            kind,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The child of `parent` whose label equals `label` exactly.
    pub fn child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].label == label)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn child_labels(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.nodes[id].children.iter().map(|&c| self.nodes[c].label.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Indented DFS dump of the whole tree, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(Self::ROOT, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push('.');
        }
        out.push_str(&self.nodes[id].label);
        out.push('\n');
        for &child in &self.nodes[id].children {
            self.render_node(child, depth + 1, out);
        }
    }
}

/// Insertion normalization: a single-word cell is trimmed and
/// lowercased; a multi-word cell (reply text) is kept verbatim.
fn normalize_label(cell: &str) -> String {
    let trimmed = cell.trim();
    if trimmed.split_whitespace().count() == 1 {
        trimmed.to_lowercase()
    } else {
        cell.to_string()
    }
}
