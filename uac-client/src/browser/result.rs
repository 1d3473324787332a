use futures::{Stream, TryStreamExt};
use hashbrown::HashMap;
use uac_types::{Error, ExpandedNodeId, LocalizedText, NodeClass, NodeId, QualifiedName};

use super::BrowseResultItem;

/// A single forward reference discovered while browsing, from `parent` to `target`
/// via `reference_type`.
#[derive(Debug, Clone)]
pub struct Reference {
    /// Source node of the reference.
    pub parent: NodeId,
    /// Target node of the reference.
    pub target: NodeId,
    /// Type of the reference, e.g. `Organizes` or `HasComponent`.
    pub reference_type: NodeId,
}

/// Map of references collected from one or more browse calls, keyed by source node.
#[derive(Debug, Default)]
pub struct References {
    by_parent: HashMap<NodeId, Vec<Reference>>,
}

impl References {
    /// Record a single reference from `parent` to `target`.
    pub fn insert_reference(&mut self, parent: &NodeId, target: &NodeId, reference_type: NodeId) {
        self.by_parent
            .entry(parent.clone())
            .or_default()
            .push(Reference {
                parent: parent.clone(),
                target: target.clone(),
                reference_type,
            });
    }

    /// All references recorded with the given node as source.
    pub fn references_from(&self, parent: &NodeId) -> &[Reference] {
        self.by_parent
            .get(parent)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over every reference collected so far.
    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.by_parent.values().flatten()
    }
}

/// Simple description of a node discovered when browsing.
#[derive(Debug)]
pub struct NodeDescription {
    /// Node class.
    pub node_class: NodeClass,
    /// Node type definition.
    pub type_definition: ExpandedNodeId,
    /// Node display name.
    pub display_name: LocalizedText,
    /// Node browse name.
    pub browse_name: QualifiedName,
}

#[derive(Debug, Default)]
/// Collected result of a browse operation.
pub struct BrowserResult {
    /// Reference map.
    pub references: References,
    /// Discovered nodes.
    pub nodes: HashMap<NodeId, NodeDescription>,
}

impl BrowserResult {
    fn new() -> Self {
        Self::default()
    }

    pub(super) async fn build_from_browser<T: Stream<Item = Result<BrowseResultItem, Error>>>(
        stream: T,
    ) -> Result<Self, Error> {
        let mut res = Self::new();

        futures::pin_mut!(stream);
        while let Some(d) = stream.try_next().await? {
            let (parent_id, refs) = d.into_results();
            for r in refs {
                res.references.insert_reference(
                    &parent_id,
                    &r.node_id.node_id,
                    r.reference_type_id,
                );

                res.nodes
                    .entry(r.node_id.node_id)
                    .or_insert_with(|| NodeDescription {
                        node_class: r.node_class,
                        type_definition: r.type_definition,
                        display_name: r.display_name,
                        browse_name: r.browse_name,
                    });
            }
        }

        Ok(res)
    }
}
