//! The subtype lattice capability.
//!
//! Rules reason about types exclusively through the [`TypeModel`] trait, a
//! narrow read-only view of the is-a relation. [`Compilation`] implements it
//! directly; tests and embedders may substitute their own lattice.

use crate::compilation::Compilation;
use crate::ids::TypeId;
use std::collections::{HashSet, VecDeque};

/// Read-only access to the subtype lattice of a model.
///
/// The provided [`is_assignable_to`](TypeModel::is_assignable_to) walks base
/// classes and interfaces breadth-first from the derived type. A visited set
/// bounds the walk, so a model with a cyclic inheritance chain terminates
/// instead of looping; such models are rejected up front by
/// [`Compilation::validate`](crate::Compilation::validate), but rules never
/// rely on that having happened.
pub trait TypeModel {
    /// The universal base type. Every type is assignable to it.
    fn universal_base(&self) -> TypeId;

    /// The base class of `ty`, or `None` for the universal base, for
    /// interfaces, and for IDs outside the model.
    fn base_type(&self, ty: TypeId) -> Option<TypeId>;

    /// The interfaces `ty` directly implements or extends. Empty for IDs
    /// outside the model.
    fn interfaces(&self, ty: TypeId) -> &[TypeId];

    /// Returns `true` if a value of type `derived` can be used where `base`
    /// is expected.
    fn is_assignable_to(&self, derived: TypeId, base: TypeId) -> bool {
        if derived == base || base == self.universal_base() {
            return true;
        }
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(derived);
        queue.push_back(derived);
        while let Some(current) = queue.pop_front() {
            if current == base {
                return true;
            }
            if let Some(parent) = self.base_type(current) {
                if visited.insert(parent) {
                    queue.push_back(parent);
                }
            }
            for &iface in self.interfaces(current) {
                if visited.insert(iface) {
                    queue.push_back(iface);
                }
            }
        }
        false
    }
}

impl TypeModel for Compilation {
    fn universal_base(&self) -> TypeId {
        self.universal_base_type()
    }

    fn base_type(&self, ty: TypeId) -> Option<TypeId> {
        self.types.try_get(ty).and_then(|t| t.base)
    }

    fn interfaces(&self, ty: TypeId) -> &[TypeId] {
        self.types
            .try_get(ty)
            .map(|t| t.interfaces.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_is_assignable_to_itself() {
        let mut comp = Compilation::new();
        let stream = comp.add_class("Stream", None);
        assert!(comp.is_assignable_to(stream, stream));
    }

    #[test]
    fn everything_is_assignable_to_universal_base() {
        let mut comp = Compilation::new();
        let object = comp.universal_base_type();
        let stream = comp.add_class("Stream", None);
        let point = comp.add_struct("Point");
        let disposable = comp.add_interface("IDisposable", Vec::new());

        assert!(comp.is_assignable_to(stream, object));
        assert!(comp.is_assignable_to(point, object));
        assert!(comp.is_assignable_to(disposable, object));
        assert!(comp.is_assignable_to(object, object));
    }

    #[test]
    fn base_chain_is_transitive() {
        let mut comp = Compilation::new();
        let stream = comp.add_class("Stream", None);
        let file_stream = comp.add_class("FileStream", Some(stream));
        let isolated = comp.add_class("IsolatedFileStream", Some(file_stream));

        assert!(comp.is_assignable_to(isolated, stream));
        assert!(comp.is_assignable_to(file_stream, stream));
        assert!(!comp.is_assignable_to(stream, file_stream));
    }

    #[test]
    fn interfaces_flow_through_base_classes() {
        let mut comp = Compilation::new();
        let disposable = comp.add_interface("IDisposable", Vec::new());
        let stream = comp.add_class("Stream", None);
        comp.implement(stream, disposable);
        let file_stream = comp.add_class("FileStream", Some(stream));

        assert!(comp.is_assignable_to(file_stream, disposable));
    }

    #[test]
    fn interface_extension_is_transitive() {
        let mut comp = Compilation::new();
        let enumerable = comp.add_interface("IEnumerable", Vec::new());
        let collection = comp.add_interface("ICollection", vec![enumerable]);
        let list = comp.add_interface("IList", vec![collection]);

        assert!(comp.is_assignable_to(list, enumerable));
        assert!(!comp.is_assignable_to(enumerable, list));
    }

    #[test]
    fn struct_is_assignable_to_its_interfaces() {
        let mut comp = Compilation::new();
        let comparable = comp.add_interface("IComparable", Vec::new());
        let point = comp.add_struct("Point");
        comp.implement(point, comparable);

        assert!(comp.is_assignable_to(point, comparable));
    }

    #[test]
    fn unrelated_interfaces_are_not_assignable() {
        let mut comp = Compilation::new();
        let disposable = comp.add_interface("IDisposable", Vec::new());
        let comparable = comp.add_interface("IComparable", Vec::new());

        assert!(!comp.is_assignable_to(disposable, comparable));
        assert!(!comp.is_assignable_to(comparable, disposable));
    }

    #[test]
    fn dangling_derived_id_is_not_assignable() {
        let mut comp = Compilation::new();
        let stream = comp.add_class("Stream", None);
        let dangling = TypeId::from_raw(999);

        assert!(!comp.is_assignable_to(dangling, stream));
        // Universal base still accepts anything, dangling or not.
        assert!(comp.is_assignable_to(dangling, comp.universal_base_type()));
    }

    #[test]
    fn cyclic_base_chain_terminates() {
        let mut comp = Compilation::new();
        let a = comp.add_class("A", None);
        let b = comp.add_class("B", Some(a));
        comp.types[a].base = Some(b);
        let unrelated = comp.add_class("C", None);

        assert!(comp.is_assignable_to(b, a));
        assert!(!comp.is_assignable_to(b, unrelated));
    }
}
