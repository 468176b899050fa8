//! Assembly of hierarchy nodes.
//!
//! The engine builds its bounding volume hierarchy from the member list, which
//! requires repeated random access: lazy sequences are drained exactly once
//! into an ordered list before the node exists.

use std::sync::Arc;

use serde::Serialize;

use crate::{math::bounds::Bounds, shape::Shape, CompileError, Result};

/// Fixed, ordered group of shapes. Children cannot be added once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    children: Arc<[Shape]>,
}

impl HierarchyNode {
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Union of the children bounds, `None` when no child has bounds
    pub fn bounds(&self) -> Option<Bounds> {
        self.children
            .iter()
            .filter_map(Shape::bounds)
            .reduce(|a, b| a.union(&b))
    }
}

/// Drains `shapes` into a node. An empty input gives a node without bounds.
pub fn hierarchy_node(shapes: impl IntoIterator<Item = Shape>) -> HierarchyNode {
    let children: Vec<Shape> = shapes.into_iter().collect();
    log::debug!("hierarchy node assembled with {} children", children.len());

    HierarchyNode {
        children: children.into(),
    }
}

/// Drains a fallible lazy sequence into a node.
///
/// The first error stops the draining and is returned as
/// [CompileError::SequenceConsumption]; the shapes consumed so far are dropped
/// so no partial node can ever be observed.
pub fn try_hierarchy_node(
    shapes: impl IntoIterator<Item = Result<Shape>>,
) -> Result<HierarchyNode> {
    let mut children = Vec::new();
    for shape in shapes {
        match shape {
            Ok(shape) => children.push(shape),
            Err(err) => {
                log::debug!(
                    "shape sequence failed after {} shapes, node discarded",
                    children.len()
                );
                return Err(CompileError::SequenceConsumption {
                    consumed: children.len(),
                    source: Box::new(err),
                });
            }
        }
    }

    Ok(hierarchy_node(children))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{hierarchy_node, try_hierarchy_node};
    use crate::{generator::Generator, material::Material, shape::Shape, CompileError, Result};

    fn foam(rng: &mut Generator, count: usize) -> impl Iterator<Item = Result<Shape>> + '_ {
        (0..count).map(move |_| {
            let material = Material::matte(rng.random_color())?;
            Shape::sphere([0.0, 0.0, 0.0], 50, material)?
                .rotate_y(180.0 * rng.rand())?
                .translate(rng.random_point_in_cube(800.0))
        })
    }

    #[test]
    fn lazy_and_materialized_sources_agree() {
        let mut rng = Generator::from_seed(0xDEADBEEF);
        let lazy = try_hierarchy_node(foam(&mut rng, 100)).unwrap();

        let mut rng = Generator::from_seed(0xDEADBEEF);
        let collected: Vec<Shape> = foam(&mut rng, 100).collect::<Result<_>>().unwrap();
        let materialized = hierarchy_node(collected);

        assert_eq!(lazy, materialized);
        assert_eq!(lazy.len(), 100);
    }

    #[test]
    fn sequence_is_drained_exactly_once() {
        let pulled = Cell::new(0);
        let source = (0..10).map(|i| {
            pulled.set(pulled.get() + 1);
            Shape::sphere([i as f32, 0.0, 0.0], 1, Material::matte([1.0, 0.0, 0.0]).unwrap())
                .unwrap()
        });

        let node = hierarchy_node(source);
        assert_eq!(pulled.get(), 10);
        assert_eq!(node.len(), 10);
        let xs: Vec<f32> = node
            .children()
            .iter()
            .map(|s| match s {
                Shape::Sphere(sphere) => sphere.center().vec().x,
                _ => panic!("expected spheres"),
            })
            .collect();
        assert_eq!(xs, (0..10).map(|i| i as f32).collect::<Vec<_>>());
    }

    #[test]
    fn empty_node_has_no_bounds() {
        let node = hierarchy_node(std::iter::empty());
        assert!(node.is_empty());
        assert_eq!(node.bounds(), None);
        assert_eq!(Shape::hierarchy_node(Vec::new()).bounds(), None);
    }

    #[test]
    fn failure_midway_discards_the_node() {
        let source = (0..5).map(|i| {
            if i == 3 {
                Shape::sphere([0.0, 0.0, 0.0], -1, Material::metallic([1.0, 1.0, 1.0])?)
            } else {
                Shape::sphere([0.0, 0.0, 0.0], 1, Material::metallic([1.0, 1.0, 1.0])?)
            }
        });

        let err = Shape::try_hierarchy_node(source).unwrap_err();
        let CompileError::SequenceConsumption { consumed, source } = err else {
            panic!("expected a sequence consumption failure")
        };
        assert_eq!(consumed, 3);
        assert!(matches!(*source, CompileError::Validation { .. }));
    }

    #[test]
    fn node_bounds_union() {
        let mat = Material::matte([1.0, 1.0, 1.0]).unwrap();
        let node = hierarchy_node([
            Shape::sphere([-50.0, 0.0, 0.0], 20, mat.clone()).unwrap(),
            Shape::sphere([50.0, 0.0, 0.0], 20, mat).unwrap(),
        ]);
        let bounds = node.bounds().unwrap();
        assert_eq!(bounds.origin.vec().x, -70.0);
        assert_eq!(bounds.end().vec().x, 70.0);
    }
}
