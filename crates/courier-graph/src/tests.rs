//! Unit tests for courier-graph.
//!
//! All tests use small hand-crafted maps, built fresh per test so no graph
//! state is ever shared.

#[cfg(test)]
mod helpers {
    use courier_core::Distance;
    use crate::RouteMap;

    /// The canonical four-location city:
    ///
    /// ```text
    ///   Depot —5— A —3— B —2— C
    ///     └────────20────────┘
    /// ```
    ///
    /// The three-hop detour Depot→A→B→C (10 km) beats the direct
    /// Depot–C edge (20 km).
    pub fn city_map() -> RouteMap {
        let mut map = RouteMap::new();
        for name in ["Depot", "A", "B", "C"] {
            map.add_location(name);
        }
        map.add_route("Depot", "A", 5).unwrap();
        map.add_route("A", "B", 3).unwrap();
        map.add_route("B", "C", 2).unwrap();
        map.add_route("Depot", "C", 20).unwrap();
        map
    }

    /// Exhaustive minimum over all simple paths from `from` to `to`.
    ///
    /// Exponential, so only for cross-checking the router on maps small
    /// enough to enumerate.
    pub fn brute_force_min(map: &RouteMap, from: &str, to: &str) -> Option<Distance> {
        fn walk(
            map: &RouteMap,
            current: &str,
            to: &str,
            seen: &mut Vec<String>,
            cost: Distance,
            best: &mut Option<Distance>,
        ) {
            if current == to {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            let next: Vec<(String, Distance)> =
                map.neighbors(current).map(|(n, d)| (n.to_owned(), d)).collect();
            for (n, d) in next {
                if seen.iter().any(|s| s == &n) {
                    continue;
                }
                seen.push(n.clone());
                walk(map, &n, to, seen, cost + d, best);
                seen.pop();
            }
        }
        let mut best = None;
        let mut seen = vec![from.to_owned()];
        walk(map, from, to, &mut seen, 0, &mut best);
        best
    }
}

// ── Route map store ───────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use crate::{GraphError, RouteMap};

    #[test]
    fn add_location_is_idempotent() {
        let mut map = RouteMap::new();
        assert!(map.add_location("Depot"));
        assert!(!map.add_location("Depot"));
        assert_eq!(map.location_count(), 1);
        assert_eq!(map.neighbors("Depot").count(), 0);
    }

    #[test]
    fn readding_does_not_clear_routes() {
        let mut map = super::helpers::city_map();
        assert!(!map.add_location("A"));
        assert_eq!(map.route_between("A", "B"), Some(3));
    }

    #[test]
    fn route_is_symmetric() {
        let map = super::helpers::city_map();
        assert_eq!(map.route_between("Depot", "A"), Some(5));
        assert_eq!(map.route_between("A", "Depot"), Some(5));
    }

    #[test]
    fn route_overwrite_last_write_wins() {
        let mut map = RouteMap::new();
        map.add_location("A");
        map.add_location("B");
        map.add_route("A", "B", 5).unwrap();
        map.add_route("B", "A", 9).unwrap();
        // Overwritten in both directions, no duplicate edge.
        assert_eq!(map.route_between("A", "B"), Some(9));
        assert_eq!(map.route_between("B", "A"), Some(9));
        assert_eq!(map.neighbors("A").count(), 1);
    }

    #[test]
    fn route_between_unknown_locations_rejected() {
        let mut map = RouteMap::new();
        let err = map.add_route("X", "Y", 4).unwrap_err();
        assert_eq!(err, GraphError::UnknownLocation("X".to_owned()));
        assert!(map.is_empty());
    }

    #[test]
    fn route_with_one_unknown_endpoint_changes_nothing() {
        let mut map = RouteMap::new();
        map.add_location("X");
        assert!(map.add_route("X", "Y", 4).is_err());
        // The known endpoint must not have gained a half-route.
        assert_eq!(map.neighbors("X").count(), 0);
    }

    #[test]
    fn neighbors_of_absent_location_is_empty() {
        let map = RouteMap::new();
        assert_eq!(map.neighbors("Nowhere").count(), 0);
    }

    #[test]
    fn locations_are_sorted() {
        let map = super::helpers::city_map();
        let names: Vec<&str> = map.locations().collect();
        assert_eq!(names, ["A", "B", "C", "Depot"]);
    }
}

// ── Path distance aggregation ─────────────────────────────────────────────────

#[cfg(test)]
mod path_distance {
    #[test]
    fn trivial_paths_cost_zero() {
        let map = super::helpers::city_map();
        let empty: [&str; 0] = [];
        assert_eq!(map.path_distance(&empty), Some(0));
        assert_eq!(map.path_distance(&["A"]), Some(0));
        // Even a single unknown node: there is no pair to look up.
        assert_eq!(map.path_distance(&["Nowhere"]), Some(0));
    }

    #[test]
    fn sums_consecutive_routes() {
        let map = super::helpers::city_map();
        assert_eq!(map.path_distance(&["Depot", "A", "B", "C"]), Some(10));
        assert_eq!(map.path_distance(&["Depot", "C"]), Some(20));
    }

    #[test]
    fn broken_pair_yields_none_not_partial_sum() {
        let map = super::helpers::city_map();
        // A–C is not a registered route.
        assert_eq!(map.path_distance(&["Depot", "A", "C"]), None);
    }

    #[test]
    fn disconnected_claim_is_unreachable() {
        let mut map = super::helpers::city_map();
        map.add_location("Z"); // isolated
        assert_eq!(map.path_distance(&["Depot", "Z"]), None);
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use crate::{DijkstraRouter, RouteMap, Router};

    #[test]
    fn detour_beats_direct_edge() {
        let map = super::helpers::city_map();
        let path = DijkstraRouter.shortest_path(&map, "Depot", "C");
        assert_eq!(path, ["Depot", "A", "B", "C"]);
        assert_eq!(map.path_distance(&path), Some(10));
    }

    #[test]
    fn result_path_is_valid() {
        let map = super::helpers::city_map();
        let path = DijkstraRouter.shortest_path(&map, "C", "Depot");
        // First element is the start, last is the end, and every consecutive
        // pair is a registered route.
        assert_eq!(path.first().map(String::as_str), Some("C"));
        assert_eq!(path.last().map(String::as_str), Some("Depot"));
        for pair in path.windows(2) {
            assert!(map.route_between(&pair[0], &pair[1]).is_some());
        }
    }

    #[test]
    fn same_node_is_the_trivial_path() {
        let map = super::helpers::city_map();
        let path = DijkstraRouter.shortest_path(&map, "Depot", "Depot");
        assert_eq!(path, ["Depot"]);
        assert_eq!(map.path_distance(&path), Some(0));
    }

    #[test]
    fn unknown_start_is_no_path() {
        let map = super::helpers::city_map();
        assert!(DijkstraRouter.shortest_path(&map, "Nowhere", "A").is_empty());
    }

    #[test]
    fn unknown_end_is_no_path() {
        let map = super::helpers::city_map();
        assert!(DijkstraRouter.shortest_path(&map, "Depot", "Nowhere").is_empty());
    }

    #[test]
    fn isolated_location_is_unreachable() {
        let mut map = super::helpers::city_map();
        map.add_location("Z"); // no routes
        assert!(DijkstraRouter.shortest_path(&map, "Depot", "Z").is_empty());
    }

    #[test]
    fn equal_weight_alternatives_any_is_valid() {
        // Two distinct 2 km paths A→C: via B or via D.  Either is a valid
        // shortest path; only the total is pinned down.
        let mut map = RouteMap::new();
        for name in ["A", "B", "C", "D"] {
            map.add_location(name);
        }
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 1).unwrap();
        map.add_route("A", "D", 1).unwrap();
        map.add_route("D", "C", 1).unwrap();

        let path = DijkstraRouter.shortest_path(&map, "A", "C");
        assert_eq!(path.len(), 3);
        assert_eq!(map.path_distance(&path), Some(2));
    }

    #[test]
    fn matches_exhaustive_search() {
        let map = super::helpers::city_map();
        for from in ["Depot", "A", "B", "C"] {
            for to in ["Depot", "A", "B", "C"] {
                let path = DijkstraRouter.shortest_path(&map, from, to);
                assert_eq!(
                    map.path_distance(&path),
                    super::helpers::brute_force_min(&map, from, to),
                    "wrong distance for {from} -> {to}",
                );
            }
        }
    }
}

// ── Delivery planning ─────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use crate::{plan_delivery, DijkstraRouter, GraphError, RouteMap};

    #[test]
    fn full_itinerary() {
        let map = super::helpers::city_map();
        let plan = plan_delivery(&map, &DijkstraRouter, "Depot", "A", "C").unwrap();
        assert_eq!(plan.to_pickup.path, ["Depot", "A"]);
        assert_eq!(plan.to_pickup.distance, Some(5));
        assert_eq!(plan.to_dropoff.path, ["A", "B", "C"]);
        assert_eq!(plan.to_dropoff.distance, Some(5));
        assert_eq!(plan.total(), Some(10));
    }

    #[test]
    fn missing_depot_is_a_config_error() {
        let mut map = RouteMap::new();
        map.add_location("A");
        let err = plan_delivery(&map, &DijkstraRouter, "Depot", "A", "A").unwrap_err();
        assert_eq!(err, GraphError::MissingDepot("Depot".to_owned()));
    }

    #[test]
    fn unreachable_dropoff_leaves_first_leg_intact() {
        let mut map = super::helpers::city_map();
        map.add_location("Z"); // isolated
        let plan = plan_delivery(&map, &DijkstraRouter, "Depot", "A", "Z").unwrap();
        assert_eq!(plan.to_pickup.distance, Some(5));
        assert!(!plan.to_dropoff.is_reachable());
        assert!(plan.to_dropoff.path.is_empty());
        // Unavailable, not zero, not a partial sum.
        assert_eq!(plan.total(), None);
    }

    #[test]
    fn pickup_at_depot() {
        let map = super::helpers::city_map();
        let plan = plan_delivery(&map, &DijkstraRouter, "Depot", "Depot", "A").unwrap();
        assert_eq!(plan.to_pickup.path, ["Depot"]);
        assert_eq!(plan.to_pickup.distance, Some(0));
        assert_eq!(plan.total(), Some(5));
    }
}
