//! Structural validation of host-exported models.
//!
//! Analysis rules tolerate malformed models at every step, but a consumer
//! loading a model from disk usually wants to know up front whether the
//! export is self-consistent. [`Compilation::validate`] checks that every
//! cross-reference lands inside the model and that the inheritance graph is
//! acyclic.

use crate::compilation::Compilation;
use crate::ids::TypeId;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use thiserror::Error;

/// A structural defect in a host-exported model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A type's base or interface list points outside the model.
    #[error("type `{0}` references a base or interface outside the model")]
    DanglingTypeRef(String),

    /// A member's owner or value type points outside the model.
    #[error("member `{0}` references a type outside the model")]
    DanglingMemberRef(String),

    /// A method's owner, return type, or a parameter type points outside
    /// the model.
    #[error("method `{0}` references a type outside the model")]
    DanglingMethodRef(String),

    /// The base-class and interface edges contain a cycle.
    #[error("inheritance cycle involving type `{0}`")]
    InheritanceCycle(String),
}

impl Compilation {
    /// Checks that the model is structurally sound: all type, member, and
    /// method cross-references resolve, and the inheritance graph has no
    /// cycle. Returns the first defect found.
    pub fn validate(&self) -> Result<(), ModelError> {
        for ty in self.types.values() {
            let mut refs = ty.interfaces.clone();
            if let Some(base) = ty.base {
                refs.push(base);
            }
            if refs.iter().any(|&r| self.types.try_get(r).is_none()) {
                return Err(ModelError::DanglingTypeRef(
                    self.resolve_name(ty.name).to_string(),
                ));
            }
        }

        for member in self.members.values() {
            let ok = self.types.try_get(member.owner).is_some()
                && self.types.try_get(member.ty).is_some();
            if !ok {
                return Err(ModelError::DanglingMemberRef(
                    self.resolve_name(member.name).to_string(),
                ));
            }
        }

        for method in self.methods.values() {
            let ok = self.types.try_get(method.owner).is_some()
                && self.types.try_get(method.return_type).is_some()
                && method
                    .params
                    .iter()
                    .all(|p| self.types.try_get(p.ty).is_some());
            if !ok {
                return Err(ModelError::DanglingMethodRef(
                    self.resolve_name(method.name).to_string(),
                ));
            }
        }

        self.check_inheritance_acyclic()
    }

    fn check_inheritance_acyclic(&self) -> Result<(), ModelError> {
        // Node indices follow arena order, so a NodeIndex converts straight
        // back to a TypeId.
        let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(self.types.len(), self.types.len());
        for _ in 0..self.types.len() {
            graph.add_node(());
        }
        for (id, ty) in self.types.iter() {
            let from = petgraph::graph::NodeIndex::new(id.as_raw() as usize);
            for &target in ty.interfaces.iter().chain(ty.base.iter()) {
                let to = petgraph::graph::NodeIndex::new(target.as_raw() as usize);
                graph.add_edge(from, to, ());
            }
        }
        match toposort(&graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => {
                let ty = TypeId::from_raw(cycle.node_id().index() as u32);
                Err(ModelError::InheritanceCycle(self.type_name(ty).to_string()))
            }
        }
    }
}
