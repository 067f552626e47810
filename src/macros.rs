//! Status accessor macros
//!
//! These macros eliminate repetitive status checks on annotated nodes.
//! All macros use `paste` internally for identifier concatenation.

/// Generate `is_xxx` methods that test a node's diff status
///
/// Uses paste's `:camel` modifier to convert the method name to the
/// `DiffStatus` variant name.
///
/// # Example
/// ```ignore
/// impl Node {
///     // added -> DiffStatus::Added, removed -> DiffStatus::Removed
///     impl_status_accessors!(added, removed);
/// }
/// ```
#[macro_export]
macro_rules! impl_status_accessors {
    ($($status:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this node is marked `" $status "`"]
                pub fn [<is_ $status>](&self) -> bool {
                    self.status() == Some($crate::status::DiffStatus::[<$status:camel>])
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::node::Node;
    use crate::status::{apply_status, DiffStatus};

    #[test]
    fn test_status_accessors() {
        let p = Node::new("paragraph");
        assert!(!p.is_added());
        assert!(!p.is_removed());

        let added = apply_status(&p, DiffStatus::Added);
        assert!(added.is_added());
        assert!(!added.is_removed());

        let removed = apply_status(&p, DiffStatus::Removed);
        assert!(removed.is_removed());
        assert!(!removed.is_added());
    }
}
