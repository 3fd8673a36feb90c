use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floor_route::{
    Destination, Edge, FloorData, FloorPlan, Point, Router, RouterConfig, SolverKind,
};

// Square grid floor with unit spacing and rooms in opposite corners
fn grid_floor(size: usize) -> Arc<FloorPlan> {
    let mut data = FloorData::default();
    let id = |row: usize, col: usize| format!("n{row}_{col}");

    for row in 0..size {
        for col in 0..size {
            data.nodes.insert(id(row, col), Point::new(col as f64, row as f64));
            if col + 1 < size {
                data.edges.push(Edge { from: id(row, col), to: id(row, col + 1), weight: 1.0 });
            }
            if row + 1 < size {
                data.edges.push(Edge { from: id(row, col), to: id(row + 1, col), weight: 1.0 });
            }
        }
    }

    let room = |name: &str, x: f64, y: f64, node: String| Destination {
        id: String::new(),
        name: name.to_string(),
        x,
        y,
        nearest_node: node,
    };
    let far = (size - 1) as f64;
    data.destinations.insert("entrance".into(), room("Entrance", -1.0, -1.0, id(0, 0)));
    data.destinations.insert("far_room".into(), room("Far Room", far + 1.0, far + 1.0, id(size - 1, size - 1)));

    Arc::new(FloorPlan::from_data(data).expect("grid floor is valid"))
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_route");

    for size in [10, 30, 60] {
        let floor = grid_floor(size);
        for solver in [SolverKind::BinaryHeap, SolverKind::LinearScan] {
            let router = Router::with_config(floor.clone(), RouterConfig { solver, ..Default::default() });
            group.bench_with_input(
                BenchmarkId::new(format!("{solver:?}"), size * size),
                &router,
                |b, router| b.iter(|| router.compute_route(black_box("entrance"), black_box("far_room"))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
