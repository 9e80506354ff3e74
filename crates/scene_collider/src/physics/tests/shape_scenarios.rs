//! End-to-end shape selection over small scenes
//!
//! Covers the four reference scenes: sparse mesh, dense mesh with and without
//! a navigation mesh, and dense geometry hidden behind a floor-plan name.

use crate::ecs::{Entity, World};
use crate::foundation::logging;
use crate::foundation::math::Vec3;
use crate::physics::{ShapeFit, ShapeSelector, ShapeStrategy, ShapeType};
use crate::scene::{MeshGeometry, SceneObject, AABB};
use crate::spatial::{BoundsTree, BuildOptions, DensityNode};

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> AABB {
        AABB::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }

    /// Geometry whose index is a single leaf of `count` triangles in a unit cube
    fn single_region(count: usize) -> MeshGeometry {
        MeshGeometry::new(count).with_bounds_tree(BoundsTree::new(vec![DensityNode::leaf(unit_box(), count)]))
    }

    /// Geometry with a dense unit-volume subregion inside a large sparse root
    fn dense_subregion() -> MeshGeometry {
        let root = DensityNode::internal(
            AABB::new(Vec3::repeat(-50.0), Vec3::repeat(50.0)),
            DensityNode::leaf(AABB::new(Vec3::repeat(-50.0), Vec3::zeros()), 20),
            DensityNode::leaf(unit_box(), 5000),
        );
        MeshGeometry::new(5020).with_bounds_tree(BoundsTree::new(vec![root]))
    }

    fn scene_with(mesh: SceneObject) -> SceneObject {
        SceneObject::group("Scene").with_child(mesh)
    }

    fn setup() -> (World, Entity, ShapeSelector) {
        logging::init_for_tests();
        let mut world = World::new();
        let scene = world.create_entity();
        (world, scene, ShapeSelector::default())
    }

    #[test]
    fn test_sparse_mesh_gets_environment_shape() {
        let (mut world, scene, mut selector) = setup();
        let root = scene_with(SceneObject::mesh("Room", single_region(50)));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);

        assert_eq!(assignment.strategy, ShapeStrategy::EnvironmentMesh);
        assert!(!assignment.scan.high_density);
        assert_eq!(assignment.scan.meshes_scanned, 1);

        let shape = world.shape(scene, "ammo-shape__environment").unwrap();
        assert_eq!(shape.shape_type, ShapeType::Mesh);
        assert_eq!(shape.fit, ShapeFit::All);
        assert_eq!(shape.margin, 0.01);
        assert!(!shape.include_invisible);
        assert_eq!(world.shape_count(), 1);
    }

    #[test]
    fn test_dense_mesh_with_nav_mesh_uses_floor_plan() {
        let (mut world, scene, mut selector) = setup();
        let nav = world.create_entity();
        world.tag_nav_mesh(nav);
        let root = scene_with(SceneObject::mesh("Statue", dense_subregion()));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);

        assert_eq!(assignment.strategy, ShapeStrategy::NavMesh);
        assert!(assignment.scan.high_density);

        let shape = world.shape(nav, "ammo-shape__floorPlan").unwrap();
        assert_eq!(shape.shape_type, ShapeType::Mesh);
        assert_eq!(shape.fit, ShapeFit::All);
        assert!(shape.include_invisible);
        assert_eq!(world.shapes(scene).count(), 0);
        assert_eq!(world.shape_count(), 1);
    }

    #[test]
    fn test_dense_mesh_without_nav_mesh_uses_default_floor() {
        let (mut world, scene, mut selector) = setup();
        let root = scene_with(SceneObject::mesh("Statue", dense_subregion()));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);

        assert_eq!(assignment.strategy, ShapeStrategy::DefaultFloor);
        let shape = world.shape(scene, "ammo-shape__defaultFloor").unwrap();
        assert_eq!(shape.shape_type, ShapeType::Box);
        assert_eq!(shape.fit, ShapeFit::Manual);
        assert_eq!(shape.half_extents, Some(Vec3::new(4000.0, 0.5, 4000.0)));
        assert_eq!(shape.offset, Some(Vec3::new(0.0, -0.5, 0.0)));
        assert_eq!(shape.margin, 0.01);
    }

    #[test]
    fn test_sparse_mesh_ignores_nav_mesh() {
        let (mut world, scene, mut selector) = setup();
        let nav = world.create_entity();
        world.tag_nav_mesh(nav);
        let root = scene_with(SceneObject::mesh("Room", single_region(50)));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);

        assert_eq!(assignment.strategy, ShapeStrategy::EnvironmentMesh);
        assert!(!assignment.scan.high_density);
        assert!(world.shape(scene, "ammo-shape__environment").is_some());
        assert_eq!(world.shapes(nav).count(), 0);
        assert_eq!(world.shape_count(), 1);
        assert_eq!(assignment.assigned.map(|record| record.entity), Some(scene));
    }

    #[test]
    fn test_floor_plan_excluded_from_scan() {
        let (mut world, scene, mut selector) = setup();
        let root = scene_with(SceneObject::mesh("Floor_Plan_01", single_region(100_000)));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);

        assert_eq!(assignment.scan.meshes_scanned, 0);
        assert!(!assignment.scan.high_density);
        assert_eq!(assignment.strategy, ShapeStrategy::EnvironmentMesh);
        assert!(world.shape(scene, "ammo-shape__environment").is_some());
    }

    #[test]
    fn test_manual_shapes_suppress_assignment() {
        let (mut world, scene, mut selector) = setup();
        let author_entity = world.create_entity();
        crate::physics::ShapeHost::set_shape(
            &mut world,
            author_entity,
            "ammo-shape__trimesh",
            crate::physics::ShapeConfig::mesh(0.0),
        );
        let root = scene_with(SceneObject::mesh("Statue", dense_subregion()));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);

        assert_eq!(assignment.strategy, ShapeStrategy::ManualOverride);
        assert!(assignment.assigned.is_none());
        assert_eq!(world.shape_count(), 1);
        assert!(selector.state().is_empty());
    }

    #[test]
    fn test_rerun_replaces_previous_assignment() {
        let (mut world, scene, mut selector) = setup();
        let nav = world.create_entity();

        let sparse = scene_with(SceneObject::mesh("Room", single_region(50)));
        let dense = scene_with(SceneObject::mesh("Statue", dense_subregion()));

        selector.select_shapes_in_world(&mut world, scene, &sparse);
        assert!(world.shape(scene, "ammo-shape__environment").is_some());

        selector.select_shapes_in_world(&mut world, scene, &dense);
        assert!(world.shape(scene, "ammo-shape__environment").is_none());
        assert!(world.shape(scene, "ammo-shape__defaultFloor").is_some());
        assert_eq!(world.shape_count(), 1);

        world.tag_nav_mesh(nav);
        selector.select_shapes_in_world(&mut world, scene, &dense);
        assert!(world.shape(scene, "ammo-shape__defaultFloor").is_none());
        assert!(world.shape(nav, "ammo-shape__floorPlan").is_some());
        assert_eq!(world.shape_count(), 1);
        assert_eq!(selector.state().len(), 1);
    }

    #[test]
    fn test_scan_visits_every_mesh_after_first_hit() {
        let (_, _, selector) = setup();
        let root = SceneObject::group("Scene")
            .with_child(SceneObject::mesh("DenseA", dense_subregion()))
            .with_child(SceneObject::mesh("Sparse", single_region(10)))
            .with_child(SceneObject::group("Nested").with_child(SceneObject::mesh("DenseB", single_region(5000))))
            .with_child(SceneObject::sky("Sky", single_region(1_000_000)))
            .with_child(SceneObject::mesh("Ground_Plane", single_region(1_000_000)))
            .with_child(SceneObject::mesh("NoIndex", MeshGeometry::new(1_000_000)));

        let scan = selector.scan(&root);
        assert!(scan.high_density);
        assert_eq!(scan.meshes_scanned, 3);
        assert_eq!(scan.high_density_meshes, 2);
    }

    #[test]
    fn test_built_index_drives_selection() {
        let (mut world, scene, mut selector) = setup();

        // 2000 small triangles packed into a unit cube
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for i in 0..2000u32 {
            let t = i as f32 / 2000.0;
            let base = i * 3;
            vertices.push(Vec3::new(t, t, t));
            vertices.push(Vec3::new(t + 0.001, t, t));
            vertices.push(Vec3::new(t, t + 0.001, t));
            indices.extend([base, base + 1, base + 2]);
        }
        vertices.push(Vec3::zeros());
        vertices.push(Vec3::new(1.0, 1.0, 1.0));
        vertices.push(Vec3::new(1.0, 0.0, 1.0));
        indices.extend([6000, 6001, 6002]);

        let geometry = MeshGeometry::from_triangles(&vertices, &indices, &BuildOptions::default()).unwrap();
        let root = scene_with(SceneObject::mesh("Sculpture", geometry));

        let assignment = selector.select_shapes_in_world(&mut world, scene, &root);
        assert_eq!(assignment.strategy, ShapeStrategy::DefaultFloor);
    }
}
