#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;

    use itertools::Itertools;
    use petgraph::graphmap::{DiGraphMap, UnGraphMap};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use unordered_pair::UnorderedPair;

    use crate::centrality::{betweenness, edge_betweenness, undirected_edge_scores};
    use crate::error::{GridError, InputError, MathError};
    use crate::grid::{find_char, neighbors_in, parse_char_grid, parse_digit_grid};
    use crate::input::{for_each_line, parse_ints};
    use crate::math::{gcd, lcm, lcm_all, neville_interpolation, prime_factorization};
    use crate::path::{dijkstra, dijkstra_with_dest, longest_path, INFINITY, NEG_INFINITY};
    use crate::{Direction, Graph, Location, PriorityQueue};

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    fn undirected<'a>(edges: &[(&'a str, &'a str, i64)]) -> Graph<&'a str> {
        let mut graph = Graph::new();
        for &(a, b, w) in edges {
            graph.add_undirected_edge(a, b, w);
        }
        graph
    }

    /// 0 - 1 - 2 - ... - (n - 1)
    fn path_graph(n: u32) -> Graph<u32> {
        let mut graph = Graph::new();
        for i in 1..n {
            graph.add_undirected_edge(i - 1, i, 1);
        }
        graph
    }

    fn random_digraph(rng: &mut StdRng, nodes: u32, edges: usize) -> DiGraphMap<u32, i64> {
        let mut graph = DiGraphMap::new();
        for n in 0..nodes {
            graph.add_node(n);
        }
        for _ in 0..edges {
            let a = rng.gen_range(0..nodes);
            let b = rng.gen_range(0..nodes);
            if a != b {
                graph.add_edge(a, b, rng.gen_range(0..20));
            }
        }
        graph
    }

    #[test]
    fn queue_update_moves_to_front() {
        let mut queue = PriorityQueue::new();
        queue.push('A', 5);
        queue.push('B', 3);
        queue.push('C', 8);
        queue.update('A', 1);

        assert_eq!(queue.pop(), Some(('A', 1)));
        assert_eq!(queue.pop(), Some(('B', 3)));
        assert_eq!(queue.pop(), Some(('C', 8)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn queue_update_can_raise_priority() {
        let mut queue: PriorityQueue<char, i32> = [('A', 1), ('B', 2), ('C', 3)].into_iter().collect();
        queue.update('A', 10);
        queue.update('D', 0);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.priority_of(&'A'), Some(10));
        assert_eq!(queue.peek(), Some(('D', 0)));
        assert_eq!(std::iter::from_fn(|| queue.pop()).map(|(k, _)| k).collect::<String>(), "DBCA");
    }

    #[test]
    fn queue_max_order() {
        let mut queue = PriorityQueue::max();
        queue.init([("low", 1), ("high", 9), ("mid", 5)]);
        queue.update("low", 7);

        assert_eq!(queue.pop(), Some(("high", 9)));
        assert_eq!(queue.pop(), Some(("low", 7)));
        assert_eq!(queue.pop(), Some(("mid", 5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_matches_sorted_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let inverse = rng.gen_bool(0.5);
            let mut queue = PriorityQueue::new();
            queue.set_priority_order(inverse);
            let mut oracle: HashMap<u8, i32> = HashMap::new();

            for _ in 0..200 {
                match rng.gen_range(0..3) {
                    0 | 1 => {
                        let key = rng.gen_range(0..40);
                        let priority = rng.gen_range(-100..100);
                        queue.update(key, priority);
                        oracle.insert(key, priority);
                    }
                    _ => {
                        let popped = queue.pop();
                        let best = if inverse {
                            oracle.values().max().copied()
                        } else {
                            oracle.values().min().copied()
                        };

                        match popped {
                            None => assert!(oracle.is_empty()),
                            Some((key, priority)) => {
                                assert_eq!(Some(priority), best);
                                assert_eq!(oracle.remove(&key), Some(priority));
                            }
                        }
                    }
                }
                assert_eq!(queue.len(), oracle.len());
            }

            let drained = std::iter::from_fn(|| queue.pop()).map(|(_, p)| p).collect_vec();
            let mut expected = oracle.into_values().sorted().collect_vec();
            if inverse {
                expected.reverse();
            }
            assert_eq!(drained, expected);
        }
    }

    #[test]
    fn graph_edges_and_components() {
        let mut graph = undirected(&[("a", "b", 1), ("b", "c", 1), ("x", "y", 1)]);
        graph.add_node("lonely");

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.weight("a", "b"), Some(1));
        assert_eq!(graph.degree("b"), 2);

        let sizes = graph.connected_components().iter().map(Vec::len).sorted().collect_vec();
        assert_eq!(sizes, vec![1, 2, 3]);

        assert!(graph.remove_undirected_edge("b", "c"));
        assert!(!graph.remove_undirected_edge("b", "c"));
        assert_eq!(graph.connected_components().len(), 4);
    }

    #[test]
    fn graph_from_undirected_graphmap() {
        let mut map: UnGraphMap<char, u8> = UnGraphMap::new();
        map.add_edge('a', 'b', 3);
        map.add_node('z');

        let graph = Graph::from_graphmap(&map, |w| i64::from(*w));
        assert_eq!(graph.weight('a', 'b'), Some(3));
        assert_eq!(graph.weight('b', 'a'), Some(3));
        assert!(graph.contains_node('z'));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn dijkstra_on_cycle() {
        let graph = undirected(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)]);
        let paths = dijkstra(&graph, "A");

        let expected: HashMap<&str, i64> = [("A", 0), ("B", 1), ("C", 2), ("D", 1)].into_iter().collect();
        assert_eq!(paths.distances, expected);
        assert_eq!(paths.path_to("A"), Some(vec!["A"]));
        assert_eq!(paths.path_to("C").map(|p| p.len()), Some(3));
    }

    #[test]
    fn dijkstra_prefers_cheaper_longer_route() {
        //   A --2-- B --1-- D --4-- E
        //   |                       |
        //   +--10-- C ------0-------+
        let graph = undirected(&[("A", "B", 2), ("A", "C", 10), ("B", "D", 1), ("D", "E", 4), ("C", "E", 0)]);
        let paths = dijkstra(&graph, "A");

        assert_eq!(paths.distance("E"), 7);
        assert_eq!(paths.distance("C"), 7);
        assert_eq!(paths.path_to("E"), Some(vec!["A", "B", "D", "E"]));
        assert_eq!(paths.path_to("C"), Some(vec!["A", "B", "D", "E", "C"]));
    }

    #[test]
    fn dijkstra_unreachable_keeps_sentinel() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 5).add_edge(3, 1, 1).add_node(4);

        let paths = dijkstra(&graph, 1);
        assert_eq!(paths.distance(2), 5);
        assert_eq!(paths.distances.get(&3), Some(&INFINITY));
        assert_eq!(paths.distances.get(&4), Some(&INFINITY));
        assert!(!paths.reaches(3));
        assert_eq!(paths.path_to(3), None);
        assert_eq!(dijkstra_with_dest(&graph, 1, 4), INFINITY);
        assert_eq!(dijkstra_with_dest(&graph, 1, 99), INFINITY);
    }

    #[test]
    fn dijkstra_matches_petgraph_and_early_exit() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..20 {
            let map = random_digraph(&mut rng, 30, 90);
            let graph = Graph::from_graphmap(&map, |w| *w);
            let source = rng.gen_range(0..30);

            let ours = dijkstra(&graph, source);
            let theirs = petgraph::algo::dijkstra(&map, source, None, |e| *e.2);

            for node in 0..30 {
                assert_eq!(ours.distance(node), theirs.get(&node).copied().unwrap_or(INFINITY), "node {node}");
                assert_eq!(dijkstra_with_dest(&graph, source, node), ours.distance(node), "node {node}");
            }

            for (node, &dist) in &theirs {
                let path = ours.path_to(*node).unwrap();
                let cost: i64 = path.iter().tuple_windows().map(|(a, b)| graph.weight(*a, *b).unwrap()).sum();
                assert_eq!(cost, dist);
            }
        }
    }

    #[test]
    fn longest_path_on_grid_dag() {
        // 1 2 3
        // 4 5 6
        // 7 8 9
        // moves only right or down; an edge weighs the value of the cell it enters
        let mut graph = Graph::new();
        let value = |l: Location| (l.1 * 3 + l.0 + 1) as i64;
        for y in 0..3 {
            for x in 0..3 {
                let here = Location(x, y);
                graph.add_node(here);
                for dir in [Direction::Right, Direction::Down] {
                    if let Some(next) = here.step_within(dir, (3, 3)) {
                        graph.add_edge(here, next, value(next));
                    }
                }
            }
        }

        let longest = longest_path(&graph, Location(0, 0), Location(2, 2));
        assert_eq!(longest.distance, 28);
        assert_eq!(longest.path, vec![Location(0, 0), Location(0, 1), Location(0, 2), Location(1, 2), Location(2, 2)]);
    }

    #[test]
    fn longest_path_does_not_walk_back_along_corridor() {
        // s - a - b - c is a two-way corridor; c -> t is one-way, as is s -> x -> t
        let mut graph = undirected(&[("s", "a", 1), ("a", "b", 1), ("b", "c", 1)]);
        graph.add_edge("c", "t", 1).add_edge("s", "x", 1).add_edge("x", "t", 1).add_node("t");

        let longest = longest_path(&graph, "s", "t");
        assert!(longest.found());
        assert_eq!(longest.distance, 4);
        assert_eq!(longest.path, vec!["s", "a", "b", "c", "t"]);
    }

    #[test]
    fn longest_path_unreachable() {
        let mut graph = Graph::new();
        graph.add_edge('a', 'b', 3).add_node('c');

        let longest = longest_path(&graph, 'a', 'c');
        assert_eq!(longest.distance, NEG_INFINITY);
        assert!(longest.path.is_empty());
        assert!(!longest.found());
    }

    #[test]
    fn betweenness_of_path_graph() {
        // undirected path of n nodes: interior node i sits between i * (n - 1 - i) pairs, counted once from each end
        let n = 5;
        let scores = betweenness(&path_graph(n));

        assert!(!scores.contains_key(&0));
        assert!(!scores.contains_key(&(n - 1)));
        for i in 1..n - 1 {
            assert_close(scores[&i], 2.0 * f64::from(i * (n - 1 - i)));
        }
    }

    #[test]
    fn betweenness_splits_equal_paths() {
        let graph = undirected(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)]);
        let scores = betweenness(&graph);

        for node in ["A", "B", "C", "D"] {
            assert_close(scores[node], 1.0);
        }

        // star: the hub is on every leaf-to-leaf path
        let star = undirected(&[("hub", "a", 1), ("hub", "b", 1), ("hub", "c", 1), ("hub", "d", 1)]);
        let scores = betweenness(&star);
        assert_close(scores["hub"], 12.0);
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn edge_betweenness_symmetric_on_path() {
        let n = 5;
        let scores = edge_betweenness(&path_graph(n));

        for i in 0..n - 1 {
            let crossing = f64::from((i + 1) * (n - 1 - i));
            assert_close(scores[&i][&(i + 1)], crossing);
            assert_close(scores[&(i + 1)][&i], crossing);
        }
    }

    #[test]
    fn edge_betweenness_finds_bridge() {
        // two triangles joined by c - d
        let graph = undirected(&[
            ("a", "b", 1), ("b", "c", 1), ("c", "a", 1),
            ("d", "e", 1), ("e", "f", 1), ("f", "d", 1),
            ("c", "d", 1),
        ]);

        let folded = undirected_edge_scores(&edge_betweenness(&graph));
        let (top, score) = folded.iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .unwrap();

        assert_eq!(*top, UnorderedPair::from(("d", "c")));
        // every one of the 3 * 3 cross pairs, in both directions
        assert_close(*score, 18.0);
        assert_eq!(folded.len(), 7);
    }

    #[test]
    fn grid_parsing() {
        let grid = parse_char_grid("#.S\n...\r\n\n").unwrap();
        assert_eq!(grid.dim(), (2, 3));
        assert_eq!(find_char(&grid, 'S'), Some(Location(2, 0)));
        assert_eq!(grid[Location(2, 0).as_index()], 'S');

        assert!(matches!(parse_char_grid("..\n...\n"), Err(GridError::Ragged { line: 2, expected: 2, found: 3 })));
        assert!(matches!(parse_char_grid("\n\n"), Err(GridError::Empty)));

        let digits = parse_digit_grid("12\n34").unwrap();
        assert_eq!(digits[[1, 0]], 3);
        assert!(matches!(parse_digit_grid("1x"), Err(GridError::NotADigit { ch: 'x', line: 1, col: 2 })));
    }

    #[test]
    fn grid_steps() {
        let corner = neighbors_in(Location(0, 0), (3, 3)).collect_vec();
        assert_eq!(corner, vec![(Direction::Down, Location(0, 1)), (Direction::Right, Location(1, 0))]);
        assert_eq!(neighbors_in(Location(1, 1), (3, 3)).count(), 4);

        assert_eq!(Location(0, 0).step_within(Direction::Up, (3, 3)), None);
        assert_eq!(Direction::Left.invert(), Direction::Right);
        assert_eq!(Direction::Up.turns(), [Direction::Left, Direction::Right]);
        assert_eq!(Direction::Down.to_string(), "DOWN");
        assert_eq!(Location(1, 5).manhattan(Location(4, 0)), 8);
        assert_eq!(Location::from((2, 7)), Location(7, 2));
    }

    #[test]
    fn line_callbacks_report_line_number() {
        let mut sum = 0;
        for_each_line(Cursor::new("1 2\n3\n"), |line| {
            sum += parse_ints(line)?.iter().sum::<i64>();
            Ok::<_, std::num::ParseIntError>(())
        }).unwrap();
        assert_eq!(sum, 6);

        let err = for_each_line(Cursor::new("1\n2\nthree\n4"), |line| parse_ints(line).map(|_| ())).unwrap_err();
        assert!(matches!(err, InputError::Line { line: 3, .. }));
    }

    #[test]
    fn integer_math() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(lcm(4, 6), 12);
        // repeated prime factors count
        assert_eq!(lcm_all([8, 12]), 24);
        assert_eq!(lcm_all([]), 1);
        assert_eq!(prime_factorization(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factorization(97), vec![97]);
        assert!(prime_factorization(1).is_empty());
    }

    #[test]
    fn prime_factorization_near_u64_max() {
        // largest prime below 2^64; trial division runs past i = 2^32
        assert_eq!(prime_factorization(18_446_744_073_709_551_557), vec![18_446_744_073_709_551_557]);
        assert_eq!(prime_factorization(u64::MAX), vec![3, 5, 17, 257, 641, 65_537, 6_700_417]);
    }

    #[test]
    fn neville_quadratic() {
        // (x + 1)^2
        assert_eq!(neville_interpolation(&[0, 1, 2], &[1, 4, 9], 5), Ok(36));
        assert_eq!(neville_interpolation(&[0, 1, 2], &[1, 4, 9], 202_300), Ok(202_301 * 202_301));
        assert_eq!(neville_interpolation(&[3], &[7], 100), Ok(7));

        assert_eq!(neville_interpolation(&[0, 1], &[1], 2), Err(MathError::SampleMismatch { xs: 2, ys: 1 }));
        assert_eq!(neville_interpolation(&[0, 0], &[1, 2], 2), Err(MathError::DuplicateSample(0)));
        assert_eq!(neville_interpolation(&[0, 2], &[0, 1], 1), Err(MathError::NotIntegral));
    }
}
